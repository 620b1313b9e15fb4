//! Canonical identifier conversion for artifact names.
//!
//! Resource types arrive in whatever convention the API author uses
//! (`"user"`, `"blog-post"`, `"orderLine"`). Generated artifacts need one
//! canonical capitalized identifier per resource, so every backend funnels
//! names through [`pascal_case`]. The conversion is a pure function with no
//! shared state, which keeps the backends independently testable.
//!
//! ## Examples
//!
//! ```
//! use anchor_gen::names::pascal_case;
//!
//! assert_eq!(pascal_case("user"), "User");
//! assert_eq!(pascal_case("blog-post"), "BlogPost");
//! assert_eq!(pascal_case("order_line"), "OrderLine");
//! assert_eq!(pascal_case("orderLine"), "OrderLine");
//! ```

use anchor_define::Operation;

/// Converts a wire name to a canonical PascalCase identifier.
///
/// Words are split on non-alphanumeric separators and on lower-to-upper case
/// boundaries; each word is emitted with its head uppercased and its tail
/// lowercased. Acronyms are therefore flattened (`"HTTPState"` becomes
/// `"HttpState"`), which keeps canonicalization insensitive to the input's
/// casing convention.
///
/// A name with no alphanumeric characters canonicalizes to the empty string;
/// schema validation rejects such resource types before generation.
///
/// ## Examples
///
/// ```
/// use anchor_gen::names::pascal_case;
///
/// assert_eq!(pascal_case("user profile"), "UserProfile");
/// assert_eq!(pascal_case("API"), "Api");
/// assert_eq!(pascal_case("v2-thing"), "V2Thing");
/// assert_eq!(pascal_case("---"), "");
/// ```
pub fn pascal_case(name: &str) -> String {
    split_words(name)
        .into_iter()
        .map(capitalize)
        .collect::<String>()
}

/// Returns the canonical name of one resource-operation structural schema
/// (e.g. `"UserCreate"`). Used as the JSON-Schema document key, the schema
/// `title`, and the lookup key for the typed-declarations backend.
///
/// ## Examples
///
/// ```
/// use anchor_define::Operation;
/// use anchor_gen::names::schema_name;
///
/// assert_eq!(schema_name("user", Operation::Create), "UserCreate");
/// assert_eq!(schema_name("blog-post", Operation::Read), "BlogPostRead");
/// ```
pub fn schema_name(resource_type: &str, op: Operation) -> String {
    format!("{}{}", pascal_case(resource_type), op.suffix())
}

/// Splits a name into words on separators and lower-to-upper boundaries.
///
/// Any non-alphanumeric character acts as a separator and is dropped.
/// `"blogPost"` -> `["blog", "Post"]`; `"blog_post"` -> `["blog", "post"]`.
fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in name.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_numeric();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: String) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(head) => {
            head.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
        }
        None => word,
    }
}
