//! Lenient decoding of a config document onto `AppConfig`.
//!
//! The document is parsed into partial structs whose leaf fields are kept as
//! raw JSON values. Unknown keys are skipped while parsing and never built
//! into a tree, however deeply they nest. Each leaf is then converted on its
//! own: a field of the wrong type keeps its default and conversion moves on,
//! so the caller gets every well-typed value plus the first error. `null` is
//! treated as an absent key.
//!
//! Type errors are ranked in a fixed order, not in document order: sections
//! execution, network, storage, and within the network section namespace,
//! topics, maxPeers, port. A `topics` element of the wrong type becomes an
//! empty string and the other elements are kept. A key repeated within one
//! object is a decode error.

use std::fmt;
use std::io::Read;
use std::marker::PhantomData;

use serde::de::value::MapAccessDeserializer;
use serde::de::{
    self, DeserializeOwned, Error as _, IgnoredAny, MapAccess, SeqAccess, Unexpected, Visitor,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::network::PartialNetworkConfig;
use super::{AppConfig, ExecutionConfig, StorageConfig};

const EXECUTION_KEY: &str = "executionConfig";
const NETWORK_KEY: &str = "networkConfig";
const STORAGE_KEY: &str = "storageConfig";

/// Root document as read from the file.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "executionConfig")]
    execution: Option<Section<ExecutionConfig>>,
    #[serde(rename = "networkConfig")]
    network: Option<Section<RawNetworkConfig>>,
    #[serde(rename = "storageConfig")]
    storage: Option<Section<StorageConfig>>,
}

/// Network section with its values not yet type-checked.
#[derive(Debug, Deserialize)]
struct RawNetworkConfig {
    namespace: Option<Value>,
    topics: Option<Value>,
    #[serde(rename = "maxPeers")]
    max_peers: Option<Value>,
    port: Option<Value>,
}

/// A value that should be a JSON object.
///
/// Anything else is consumed and kept as a description, so one mistyped
/// section does not abort the rest of the document.
#[derive(Debug)]
enum Section<T> {
    Object(T),
    Mistyped(String),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Section<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SectionVisitor(PhantomData))
    }
}

struct SectionVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for SectionVisitor<T> {
    type Value = Section<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(Section::Object)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(mistyped(Unexpected::Seq))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(mistyped(Unexpected::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(mistyped(Unexpected::Signed(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(mistyped(Unexpected::Unsigned(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(mistyped(Unexpected::Float(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(mistyped(Unexpected::Str(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(mistyped(Unexpected::Unit))
    }
}

fn mistyped<T>(found: Unexpected<'_>) -> Section<T> {
    Section::Mistyped(found.to_string())
}

/// Decode the first JSON value in `reader` onto a default `AppConfig`.
///
/// A syntax error fails the whole call. Type errors do not: the populated
/// config is returned together with the first one.
pub(super) fn decode<R: Read>(
    reader: R,
) -> Result<(AppConfig, Option<serde_json::Error>), serde_json::Error> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    let raw = Option::<Section<RawConfig>>::deserialize(&mut de)?;
    Ok(apply(raw))
}

fn apply(raw: Option<Section<RawConfig>>) -> (AppConfig, Option<serde_json::Error>) {
    let mut decoder = Decoder::default();
    let mut config = AppConfig::default();

    let root = match raw {
        None => return (config, None),
        Some(Section::Object(root)) => root,
        Some(Section::Mistyped(found)) => {
            decoder.record(type_error(None, &found));
            return (config, decoder.first_error);
        }
    };

    if let Some(execution) = decoder.section(root.execution, EXECUTION_KEY) {
        config.execution = execution;
    }

    if let Some(network) = decoder.section(root.network, NETWORK_KEY) {
        let partial = PartialNetworkConfig {
            namespace: decoder.field(network.namespace, NETWORK_KEY, "namespace"),
            topics: decoder.topics(network.topics, NETWORK_KEY, "topics"),
            max_peers: decoder.field(network.max_peers, NETWORK_KEY, "maxPeers"),
            port: decoder.field(network.port, NETWORK_KEY, "port"),
        };
        config.network = partial.resolve();
    }

    if let Some(storage) = decoder.section(root.storage, STORAGE_KEY) {
        config.storage = storage;
    }

    (config, decoder.first_error)
}

#[derive(Default)]
struct Decoder {
    first_error: Option<serde_json::Error>,
}

impl Decoder {
    fn record(&mut self, err: serde_json::Error) {
        if self.first_error.is_none() {
            self.first_error = Some(err);
        }
    }

    fn section<T>(&mut self, section: Option<Section<T>>, key: &str) -> Option<T> {
        match section? {
            Section::Object(inner) => Some(inner),
            Section::Mistyped(found) => {
                self.record(type_error(Some(key), &found));
                None
            }
        }
    }

    fn field<T: DeserializeOwned>(
        &mut self,
        value: Option<Value>,
        section: &str,
        key: &str,
    ) -> Option<T> {
        let value = match value {
            None | Some(Value::Null) => return None,
            Some(value) => value,
        };

        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                self.record(serde_json::Error::custom(format!("{section}.{key}: {err}")));
                None
            }
        }
    }

    /// Topics are converted element by element; a bad element becomes `""`.
    fn topics(&mut self, value: Option<Value>, section: &str, key: &str) -> Option<Vec<String>> {
        let items = match value? {
            Value::Array(items) => items,
            other => return self.field(Some(other), section, key),
        };

        let mut topics = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            let topic: Option<String> = self.field(Some(item), section, &format!("{key}[{i}]"));
            topics.push(topic.unwrap_or_default());
        }
        Some(topics)
    }
}

fn type_error(path: Option<&str>, found: &str) -> serde_json::Error {
    let err = serde_json::Error::invalid_type(Unexpected::Other(found), &"an object");
    match path {
        Some(path) => serde_json::Error::custom(format!("{path}: {err}")),
        None => err,
    }
}
