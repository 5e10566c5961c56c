use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::entry::Entry;
use crate::heap::MappedHeap;

/// Node-facing priority queue over `{ priority, key }` entries.
#[napi(js_name = "MappedQueue")]
pub struct JsMappedQueue {
    inner: MappedHeap<Entry>,
}

#[napi]
impl JsMappedQueue {
    #[napi(constructor)]
    pub fn new(entries: Option<Vec<Entry>>) -> Result<Self> {
        let inner = MappedHeap::from_vec(entries.unwrap_or_default())?;
        Ok(Self { inner })
    }

    /// Builds a queue from a JSON array of entries.
    #[napi(factory)]
    pub fn from_json(json: String) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(&json).map_err(|err| {
            Error::new(
                Status::InvalidArg,
                format!("Failed to parse queue entries: {}", err),
            )
        })?;
        Ok(Self {
            inner: MappedHeap::from_vec(entries)?,
        })
    }

    #[napi]
    pub fn push(&mut self, entry: Entry) -> bool {
        self.inner.push(entry)
    }

    #[napi]
    pub fn pop(&mut self) -> Result<Entry> {
        Ok(self.inner.pop()?)
    }

    #[napi]
    pub fn update(&mut self, old: Entry, new: Entry) -> Result<()> {
        Ok(self.inner.update(&old, new)?)
    }

    #[napi]
    pub fn remove(&mut self, entry: Entry) -> Result<()> {
        Ok(self.inner.remove(&entry)?)
    }

    #[napi]
    pub fn contains(&self, entry: Entry) -> bool {
        self.inner.contains(&entry)
    }

    #[napi(getter)]
    pub fn size(&self) -> u32 {
        self.inner.len() as u32
    }

    #[napi]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
