mod institution_name;
mod institutions;

pub use institution_name::InstitutionName;
pub use institutions::institution_names;
