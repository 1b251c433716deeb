//! Helpers for decoding JSON response bodies.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserializes a JSON [`Value`], logging unknown fields and error paths.
///
/// With the `tracing` feature enabled, unknown fields are reported via
/// [`serde_ignored`] and failed deserializations are re-run through
/// [`serde_path_to_error`] so the offending path appears in the log.
#[cfg(feature = "tracing")]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(
        type_name = %type_name::<T>(),
        json = %value,
        "deserializing JSON"
    );

    // Keep the original around so failure diagnostics can re-deserialize it
    let original = value.clone();

    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_: &serde_json::Error| {
        let json = original.to_string();
        let jd = &mut serde_json::Deserializer::from_str(&json);
        let path_result: Result<T, _> = serde_path_to_error::deserialize(jd);
        if let Err(path_err) = path_result {
            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path_err.path(),
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            "unknown field in response"
        );
    }

    Ok(result)
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}
