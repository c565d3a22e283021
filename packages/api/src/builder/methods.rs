//! Terminal document operations
//!
//! Thin typed wrappers over the client's get/put/append/delete.

use docpath_client::{DocumentResult, jsonpath::PathEvaluator, store::RecordStore};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::{
    core::DocumentRef,
    error::{DocpathError, DocpathResult},
};

impl<S: RecordStore, E: PathEvaluator> DocumentRef<'_, S, E> {
    /// Read the value(s) at `path`
    ///
    /// # Errors
    ///
    /// See [`DocumentClient::get`](docpath_client::DocumentClient::get).
    pub fn get(&self, path: &str) -> DocumentResult<Value> {
        if self.debug_enabled {
            log::debug!("Docpath Builder: GET {path} on {}/{}", self.key, self.field);
        }
        self.client
            .get(&self.key, &self.field, path, self.policy.as_ref())
    }

    /// Read every value at `path` without collapsing single matches
    ///
    /// # Errors
    ///
    /// See [`DocumentClient::get_all`](docpath_client::DocumentClient::get_all).
    pub fn get_all(&self, path: &str) -> DocumentResult<Vec<Value>> {
        if self.debug_enabled {
            log::debug!("Docpath Builder: GET ALL {path} on {}/{}", self.key, self.field);
        }
        self.client
            .get_all(&self.key, &self.field, path, self.policy.as_ref())
    }

    /// Read the value at `path` and deserialize it
    ///
    /// # Errors
    ///
    /// `DocpathError::Document` when the read fails and
    /// `DocpathError::Conversion` when the value does not deserialize as `T`.
    ///
    /// # Examples
    /// ```
    /// use docpath::{Docpath, Documents, RecordKey};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Item {
    ///     name: String,
    /// }
    ///
    /// let client = Docpath::in_memory();
    /// let doc = client.document(RecordKey::new("test", "docs", "k"), "doc");
    /// doc.put("$", serde_json::json!({"items": [{"name": "pen"}]})).unwrap();
    ///
    /// let item: Item = doc.get_as("$.items[0]").unwrap();
    /// assert_eq!(item.name, "pen");
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> DocpathResult<T> {
        let value = self.get(path)?;
        serde_json::from_value(value).map_err(|source| DocpathError::Conversion {
            path: path.to_string(),
            source,
        })
    }

    /// Store `value` at `path`
    ///
    /// # Errors
    ///
    /// `DocpathError::Conversion` when `value` does not serialize, otherwise
    /// the client's put errors.
    pub fn put<T: Serialize>(&self, path: &str, value: T) -> DocpathResult<()> {
        if self.debug_enabled {
            log::debug!("Docpath Builder: PUT {path} on {}/{}", self.key, self.field);
        }
        let value = to_value(path, value)?;
        self.client
            .put(&self.key, &self.field, path, value, self.policy.as_ref())?;
        Ok(())
    }

    /// Append `value` to the list(s) at `path`
    ///
    /// # Errors
    ///
    /// `DocpathError::Conversion` when `value` does not serialize, otherwise
    /// the client's append errors.
    pub fn append<T: Serialize>(&self, path: &str, value: T) -> DocpathResult<()> {
        if self.debug_enabled {
            log::debug!("Docpath Builder: APPEND {path} on {}/{}", self.key, self.field);
        }
        let value = to_value(path, value)?;
        self.client
            .append(&self.key, &self.field, path, value, self.policy.as_ref())?;
        Ok(())
    }

    /// Delete the value(s) at `path`
    ///
    /// # Errors
    ///
    /// See [`DocumentClient::delete`](docpath_client::DocumentClient::delete).
    pub fn delete(&self, path: &str) -> DocumentResult<()> {
        if self.debug_enabled {
            log::debug!("Docpath Builder: DELETE {path} on {}/{}", self.key, self.field);
        }
        self.client
            .delete(&self.key, &self.field, path, self.policy.as_ref())
    }
}

fn to_value<T: Serialize>(path: &str, value: T) -> DocpathResult<Value> {
    serde_json::to_value(value).map_err(|source| DocpathError::Conversion {
        path: path.to_string(),
        source,
    })
}
