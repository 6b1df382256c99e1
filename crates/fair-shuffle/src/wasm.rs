//! WASM bindings for in-browser verification of a published shuffle

#![cfg(feature = "wasm")]

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::checkpoints;
use crate::{reduce, BlockHash, FairShuffle, Items, ShuffleConfig, ShuffleError};

fn js_error(e: ShuffleError) -> JsError {
    JsError::new(&e.to_string())
}

fn parse_config(rejection: bool) -> ShuffleConfig {
    if rejection {
        ShuffleConfig::rejection()
    } else {
        ShuffleConfig::legacy()
    }
}

/// Parse `items_json`, shuffle it by `hash` and return the JSON result.
fn shuffle_json(items_json: &str, hash: &[u8], rejection: bool) -> Result<Value, ShuffleError> {
    let value: Value = serde_json::from_str(items_json)
        .map_err(|e| ShuffleError::InvalidArgument(format!("invalid items: {}", e)))?;
    let fair = FairShuffle::with_config(Items::from_json(value)?, parse_config(rejection));
    Ok(fair.shuffle(hash)?.into_json())
}

/// Shuffle items by a raw 32-byte hash
///
/// # Arguments
/// * `items_json` - `null`, a string, an integer, a bool, an array, or `{"tuple": [...]}`
/// * `hash` - exactly 32 bytes
/// * `rejection` - use bias-free rejection draws instead of the checkpoint-compatible ones
///
/// # Returns
/// The shuffled items: an array, or `{"tuple": [...]}` for tuple input
#[wasm_bindgen]
pub fn shuffle_items(items_json: &str, hash: &[u8], rejection: bool) -> Result<JsValue, JsError> {
    let shuffled = shuffle_json(items_json, hash, rejection).map_err(js_error)?;

    // Plain JS objects rather than Maps for `{"tuple": [...]}`
    shuffled
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Shuffle items by a hex-encoded block hash
#[wasm_bindgen]
pub fn shuffle_items_hex(items_json: &str, hash_hex: &str, rejection: bool) -> Result<JsValue, JsError> {
    let hash = BlockHash::from_hex(hash_hex).map_err(js_error)?;
    shuffle_items(items_json, hash.as_ref(), rejection)
}

/// Seed a 32-byte hash reduces to
#[wasm_bindgen]
pub fn seed_for_hash(hash: &[u8]) -> Result<u32, JsError> {
    reduce(hash).map_err(js_error)
}

/// Check this build against every published checkpoint.
///
/// Returns the heights that failed as an array (empty when all pass).
#[wasm_bindgen]
pub fn verify_checkpoints() -> Result<js_sys::Array, JsError> {
    let failed = checkpoints::verify_all().map_err(js_error)?;
    Ok(failed.into_iter().map(JsValue::from).collect())
}
