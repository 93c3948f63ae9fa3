mod migrations;
mod seeding;
