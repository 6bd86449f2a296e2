pub mod attendance_status;
pub mod bill_type;
pub mod fee_status;
pub mod gender;
pub mod role;
pub mod salary_status;

pub use attendance_status::AttendanceStatus;
pub use bill_type::BillType;
pub use fee_status::FeeStatus;
pub use gender::Gender;
pub use role::Role;
pub use salary_status::SalaryStatus;
