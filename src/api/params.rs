//! Request parameter building blocks shared by both clients

use crate::constants::ID_SEPARATOR;
use crate::error::BlaseballError;

/// One or more opaque resource identifiers (players, matchups, blessings, ...).
///
/// A single identifier and a one-element list are the same value, so every
/// bulk endpoint accepts `"id"`, `vec!["a", "b"]`, `&["a", "b"]` and so on
/// through `impl Into<Ids>`. Identifiers are never validated client-side.
///
/// ```
/// use blaser::Ids;
///
/// assert_eq!(Ids::from("a"), Ids::from(vec!["a"]));
/// assert_eq!(Ids::from(["a", "b"]).joined(), "a,b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ids(Vec<String>);

impl Ids {
    /// The identifiers in caller order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined form placed on the wire
    pub fn joined(&self) -> String {
        self.0.join(ID_SEPARATOR)
    }
}

impl From<&str> for Ids {
    fn from(id: &str) -> Self {
        Ids(vec![id.to_string()])
    }
}

impl From<String> for Ids {
    fn from(id: String) -> Self {
        Ids(vec![id])
    }
}

impl From<&String> for Ids {
    fn from(id: &String) -> Self {
        Ids(vec![id.clone()])
    }
}

impl From<Vec<String>> for Ids {
    fn from(ids: Vec<String>) -> Self {
        Ids(ids)
    }
}

impl From<Vec<&str>> for Ids {
    fn from(ids: Vec<&str>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<&[&str]> for Ids {
    fn from(ids: &[&str]) -> Self {
        ids.iter().copied().collect()
    }
}

impl From<&[String]> for Ids {
    fn from(ids: &[String]) -> Self {
        Ids(ids.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Ids {
    fn from(ids: [&str; N]) -> Self {
        ids.into_iter().collect()
    }
}

impl<const N: usize> From<&[&str; N]> for Ids {
    fn from(ids: &[&str; N]) -> Self {
        ids.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Ids {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Ids(iter.into_iter().map(Into::into).collect())
    }
}

/// Translates a caller-facing 1-based season or day number into the
/// upstream 0-based value. `0` has no 0-based counterpart and is rejected.
pub(crate) fn zero_based(name: &str, ordinal: u32) -> Result<u32, BlaseballError> {
    ordinal.checked_sub(1).ok_or_else(|| {
        BlaseballError::invalid_argument(format!(
            "'{name}' is 1-based and must be at least 1, got {ordinal}"
        ))
    })
}

/// Ordered query parameters for one request. Values are scalars only;
/// identifier lists arrive here already joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    pub(crate) fn push(&mut self, key: &'static str, value: impl ToString) {
        self.0.push((key, value.to_string()));
    }

    /// Adds the parameter only when a value is present
    pub(crate) fn push_opt<T: ToString>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Treats empty strings as "not supplied" for optional alternatives.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_id_equals_one_element_list() {
        let id = "c0732e36-3731-4f1a-abdc-daa9563b6506";
        let single = Ids::from(id);
        assert_eq!(single, Ids::from(vec![id]));
        assert_eq!(single, Ids::from(vec![id.to_string()]));
        assert_eq!(single, Ids::from([id]));
        assert_eq!(single, Ids::from(&[id][..]));
        assert_eq!(single.joined(), id);
    }

    #[test]
    fn test_multiple_ids_joined_with_comma() {
        let ids = Ids::from(&[
            "c0732e36-3731-4f1a-abdc-daa9563b6506",
            "0bb35615-63f2-4492-80ec-b6b322dc5450",
        ]);
        assert_eq!(ids.len(), 2);
        assert_eq!(
            ids.joined(),
            "c0732e36-3731-4f1a-abdc-daa9563b6506,0bb35615-63f2-4492-80ec-b6b322dc5450"
        );
    }

    #[test]
    fn test_ids_keep_caller_order_and_content() {
        let ids: Ids = ["b", "a", "b"].into_iter().collect();
        assert_eq!(ids.as_slice(), &["b", "a", "b"]);
        assert_eq!(ids.joined(), "b,a,b");
    }

    #[test]
    fn test_empty_ids() {
        let ids = Ids::from(Vec::<String>::new());
        assert!(ids.is_empty());
        assert_eq!(ids.joined(), "");
    }

    #[test]
    fn test_zero_based_translation() {
        assert_eq!(zero_based("season", 1).unwrap(), 0);
        assert_eq!(zero_based("season", 8).unwrap(), 7);
        assert_eq!(zero_based("day", 44).unwrap(), 43);
        assert_eq!(zero_based("day", u32::MAX).unwrap(), u32::MAX - 1);
    }

    #[test]
    fn test_zero_based_rejects_zero() {
        let err = zero_based("season", 0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("'season' is 1-based"));
    }

    #[test]
    fn test_query_params_order_and_optional() {
        let mut params = QueryParams::new().with("day", 43).with("season", 7);
        params.push_opt::<u32>("limit", None);
        params.push_opt("order", Some("DESC"));
        assert_eq!(
            params.as_pairs(),
            &[
                ("day", "43".to_string()),
                ("season", "7".to_string()),
                ("order", "DESC".to_string()),
            ]
        );
        assert_eq!(params.get("season"), Some("7"));
        assert_eq!(params.get("limit"), None);
        assert!(!params.is_empty());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("x")), Some("x"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }
}
