pub mod a001_student;
pub mod a002_teacher;
pub mod a003_staff;
pub mod a004_school_class;
pub mod a005_subject;
pub mod a006_attendance;
pub mod a007_fee;
pub mod a008_salary;
pub mod a009_tenant;
