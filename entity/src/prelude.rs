pub use super::appointment::Entity as Appointment;
pub use super::disease::Entity as Disease;
pub use super::doctor::Entity as Doctor;
pub use super::doctor_schedule::Entity as DoctorSchedule;
pub use super::medicine::Entity as Medicine;
pub use super::patient::Entity as Patient;
pub use super::review::Entity as Review;
pub use super::specialty::Entity as Specialty;
pub use super::user::Entity as User;
