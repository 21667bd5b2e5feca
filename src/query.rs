use crate::error::{Error, Result};

/// Join address fragments with ", " and replace spaces with "+".
///
/// Fails when there are no fragments or every fragment is blank.
///
/// Nothing else is escaped, so fragments must not carry `&`, `#` or other
/// reserved characters.
pub fn format_address<S: AsRef<str>>(params: &[S]) -> Result<String> {
    if params.iter().all(|param| param.as_ref().trim().is_empty()) {
        return Err(Error::EmptyAddress);
    }
    Ok(params
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ")
        .replace(' ', "+"))
}
