/// Authentication utilities
///
/// This module provides the token primitives for TaskTrack:
///
/// # Modules
///
/// - [`jwt`]: JWT token generation and validation
///
/// # Example
///
/// ```
/// use tasktrack_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let claims = Claims::new("admin".to_string());
/// let token = create_token(&claims, "secret-key")?;
///
/// let validated = validate_token(&token, "secret-key")?;
/// assert_eq!(validated.sub, "admin");
/// # Ok(())
/// # }
/// ```

pub mod jwt;
