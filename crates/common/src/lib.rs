pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_type_ok() {
        let w = types::Welcome { message: "Welcome to the content service" };
        assert_eq!(w.message, "Welcome to the content service");
    }
}
