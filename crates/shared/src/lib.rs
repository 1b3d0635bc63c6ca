pub mod countdown;
pub mod domain;
pub mod festival;
pub mod protocol;
pub mod wing;
