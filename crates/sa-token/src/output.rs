use crate::errors::TokenError;
use std::io::Write;

pub const BEGIN_TOKEN: &str = "=== BEGIN TOKEN ===";
pub const END_TOKEN: &str = "=== END TOKEN ===";

/// Write `token` framed by the begin/end delimiter lines, then flush.
///
/// # Errors
///
/// Returns `TokenError::Output` if writing or flushing fails.
pub fn write_token<W: Write>(out: &mut W, token: &str) -> Result<(), TokenError> {
    write!(
        out,
        "Token generated:\n\n{BEGIN_TOKEN}\n{token}\n{END_TOKEN}\n"
    )?;
    out.flush()?;
    Ok(())
}
