use serde::Serialize;
use serde_json::{Map, Value};

/// Free-form JSON attributes attached to an event or a profile.
pub type Properties = Map<String, Value>;

/// Builds [`Properties`] from key/value pairs.
pub fn properties<I, K, V>(pairs: I) -> Properties
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Body posted to the event endpoint.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventPayload<'a> {
    pub website_id: &'a str,
    pub name: &'a str,
    pub profile_id: &'a str,
    pub metadata: &'a Properties,
}

/// Body posted to the profile endpoint.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProfilePayload<'a> {
    pub profile_id: &'a str,
    pub profile: &'a Properties,
    pub website_id: &'a str,
}
