pub mod age;
pub mod countdown;
pub mod format;
pub mod page;
pub mod price;
pub mod table;
