pub mod parameter;
pub mod segment;
pub mod test_case;
