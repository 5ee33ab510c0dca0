//! Conversion of protobuf enum entry names into Java constant names.

/// Convert an enum entry identifier into an upper-snake-case constant name.
///
/// Names that already look snake-like (they contain `_`, or are not a mix of
/// upper- and lowercase letters) are only uppercased. Mixed-case names get an
/// underscore before every uppercase letter, except that a literal `ID` is kept
/// together as one word.
///
/// # Example
///
/// ```
/// use proto_enum_codegen::normalize;
///
/// assert_eq!(normalize("tokenId"), "TOKEN_ID");
/// assert_eq!(normalize("nonFungibleUnique"), "NON_FUNGIBLE_UNIQUE");
/// assert_eq!(normalize("getAccountIDRecords"), "GET_ACCOUNT_ID_RECORDS");
/// assert_eq!(normalize("ALREADY_SNAKE"), "ALREADY_SNAKE");
/// ```
pub fn normalize(name: &str) -> String {
    if is_snake_like(name) {
        return name.to_uppercase();
    }

    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    out.extend(chars[0].to_uppercase());

    let mut i = 1;
    while i < chars.len() {
        if id_is_next(&chars, i) {
            out.push_str("_ID");
            i += 2;
            continue;
        }
        let c = chars[i];
        if c.is_uppercase() {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        i += 1;
    }
    out
}

fn is_snake_like(name: &str) -> bool {
    if name.contains('_') {
        return true;
    }
    let has_upper = name.chars().any(char::is_uppercase);
    let has_lower = name.chars().any(char::is_lowercase);
    !(has_upper && has_lower)
}

fn id_is_next(chars: &[char], i: usize) -> bool {
    chars.get(i) == Some(&'I') && chars.get(i + 1) == Some(&'D')
}
