//! Identifiers of the organization's standard training catalog.

use super::domain::{Course, CourseId};

pub const RESPECTING_YOUR_COLLEAGUES: CourseId =
    CourseId::from_u128(0x1fd1_15cf_f44c_4982_86bc_a8fe_2e4f_f83e);
pub const COMPANY_INTRODUCTION: CourseId =
    CourseId::from_u128(0x37e0_3ca7_c730_4351_834c_b66f_280c_db01);
pub const DEALING_WITH_CUSTOMERS_101: CourseId =
    CourseId::from_u128(0x844e_14ce_c055_49e9_9610_8556_69c9_859b);
pub const DISASTER_MANAGEMENT_101: CourseId =
    CourseId::from_u128(0xcbf6_db3b_c4ee_46aa_9457_5fa8_aefe_f33a);
pub const DEALING_WITH_CUSTOMERS_ADVANCED: CourseId =
    CourseId::from_u128(0xd6e0_e4b7_9365_4332_9b29_bb7b_f096_64a6);

/// Courses every new internal employee is enrolled in, in enrollment order.
pub const OBLIGATORY_COURSES: [CourseId; 2] = [COMPANY_INTRODUCTION, RESPECTING_YOUR_COLLEAGUES];

/// The persisted catalog as shipped with a fresh installation.
pub fn standard_catalog() -> Vec<Course> {
    catalog_with_obligatory(&OBLIGATORY_COURSES)
}

/// The standard catalog with `is_obligatory` set exactly for the ids in `obligatory`.
pub fn catalog_with_obligatory(obligatory: &[CourseId]) -> Vec<Course> {
    [
        (RESPECTING_YOUR_COLLEAGUES, "Respecting Your Colleagues"),
        (COMPANY_INTRODUCTION, "Company Introduction"),
        (DEALING_WITH_CUSTOMERS_101, "Dealing with Customers 101"),
        (DISASTER_MANAGEMENT_101, "Disaster Management 101"),
        (DEALING_WITH_CUSTOMERS_ADVANCED, "Dealing with Customers - Advanced"),
    ]
    .into_iter()
    .map(|(id, title)| Course {
        id,
        title: title.to_string(),
        is_obligatory: obligatory.contains(&id),
        is_new: false,
    })
    .collect()
}
