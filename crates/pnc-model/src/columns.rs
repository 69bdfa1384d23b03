//! Canonical column names of the prenatal checkup export.

pub const NAME: &str = "Name";
pub const GENDER: &str = "Gender";
pub const DATE_OF_BIRTH: &str = "Date_of_Birth";
pub const MOTHER_BLOOD_TYPE: &str = "Mother_Blood_Type";
pub const HOSPITAL_NAME: &str = "Hospital_Name";
pub const USER_REGISTRATION_DATE: &str = "User_Registration_Date";
pub const USER_REGISTRATION_TIME: &str = "User_Registration_Time";
pub const LAST_CHECKUP_DATE: &str = "Last_Checkup_Date";
pub const LAST_CHECKUP_TIME: &str = "Last_Checkup_Time";
pub const REMINDER_DATE: &str = "Reminder_Date";
pub const NO_OF_CHECKUPS: &str = "No_of_Checkups";
pub const NO_OF_MISSED_CHECKUPS: &str = "No_of_Missed_Checkups";
pub const BLOOD_PRESSURE: &str = "Blood_Pressure";
pub const DELIVERY_DATE: &str = "Delivery_Date";
pub const BABY_GENDER: &str = "Baby_Gender";
pub const DELIVERY_TYPE: &str = "Delivery_Type";
pub const WEIGHT: &str = "Weight";
pub const GESTATIONAL_AGE: &str = "Gestational_Age";
pub const FETAL_HEART_RATE: &str = "Fetal_Heart_Rate";
pub const ANOMALY: &str = "Anomaly";
pub const MATERNAL_MENTAL_HEALTH: &str = "Maternal_Mental_Health";

/// Columns removed by the reshape pass.
pub const DROPPED: [&str; 4] = [REMINDER_DATE, GENDER, NO_OF_CHECKUPS, NO_OF_MISSED_CHECKUPS];

/// Derived columns appended by the reshape pass.
pub const CHECKUP: &str = "Checkup";
pub const BP_CATEGORY: &str = "BP_Category";
