pub mod input;
pub use input::{InputError, InputSource, LineScanner};

pub mod age;
pub use age::{
    AGE_PROMPT, Age, AgeRejection, AgeStrategy, STRICT_AGE_PROMPT, parse_age_token, read_age,
    read_age_direct, read_age_strict, read_age_token,
};

pub mod name;
pub use name::{FullName, NAME_PROMPT, NameError, NameRule, read_full_name, validate_full_name};

pub mod terminal;
pub use terminal::Terminal;
