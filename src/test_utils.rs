//! Shared test utilities for the product console.
//!
//! This module provides an in-memory `ProductApi` that behaves like the inventory
//! backend (server-assigned ids, substring search, "not found" rejections) and records
//! every call so tests can assert which requests were, or were not, sent.
//!
//! For the HTTP client itself, [`serve_once`] runs a one-shot local server that
//! records the request it receives and answers with a canned response.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        api::{ApiAction, ProductApi, api_error},
        console::Console,
        validation::FormField,
    },
    entities::{Product, ProductDraft, ProductId},
    errors::Result,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

#[derive(Debug, Default)]
struct Store {
    products: Vec<Product>,
    next_id: u64,
    calls: HashMap<ApiAction, usize>,
    failures: HashMap<ApiAction, Option<String>>,
    last_search: Option<String>,
}

impl Store {
    fn assign_id(&mut self) -> ProductId {
        self.next_id += 1;
        ProductId::new(self.next_id.to_string())
    }

    /// Counts the call and returns the injected failure for `action`, if any.
    fn enter(&mut self, action: ApiAction) -> Result<()> {
        *self.calls.entry(action).or_default() += 1;
        match self.failures.get(&action) {
            None => Ok(()),
            Some(None) => Err(api_error(action, None)),
            Some(Some(message)) => {
                let body = serde_json::json!({ "error": message }).to_string();
                Err(api_error(action, Some(&body)))
            }
        }
    }

    fn not_found(action: ApiAction) -> crate::errors::Error {
        api_error(action, Some(r#"{"error": "Product not found"}"#))
    }
}

/// In-memory stand-in for the inventory API.
///
/// Clones share the same store, so a test can keep one handle while the console owns
/// another.
#[derive(Clone, Debug, Default)]
pub struct InMemoryApi {
    store: Arc<Mutex<Store>>,
}

impl InMemoryApi {
    /// Inserts a product directly, bypassing call counting.
    pub fn seed(&self, name: &str, cost: f64, price: f64, quantityavailable: f64) -> Product {
        let mut store = self.store.lock().unwrap();
        let product = Product {
            id: store.assign_id(),
            name: name.to_string(),
            cost,
            price,
            quantityavailable,
        };
        store.products.push(product.clone());
        product
    }

    /// Removes a product directly, bypassing call counting.
    pub fn remove(&self, id: &ProductId) {
        self.store.lock().unwrap().products.retain(|p| &p.id != id);
    }

    /// Reads a stored product directly.
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.store
            .lock()
            .unwrap()
            .products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    /// Everything currently stored.
    pub fn snapshot(&self) -> Vec<Product> {
        self.store.lock().unwrap().products.clone()
    }

    /// Makes every later `action` call fail. `Some(message)` simulates a rejected
    /// response with an `error` field, `None` a failure with no usable body.
    pub fn fail(&self, action: ApiAction, message: Option<&str>) {
        self.store
            .lock()
            .unwrap()
            .failures
            .insert(action, message.map(str::to_string));
    }

    /// Number of `action` calls made so far.
    pub fn calls(&self, action: ApiAction) -> usize {
        self.store
            .lock()
            .unwrap()
            .calls
            .get(&action)
            .copied()
            .unwrap_or_default()
    }

    /// Number of calls of any kind made so far.
    pub fn total_calls(&self) -> usize {
        self.store.lock().unwrap().calls.values().sum()
    }

    /// The query received by the most recent search call.
    pub fn last_search(&self) -> Option<String> {
        self.store.lock().unwrap().last_search.clone()
    }
}

impl ProductApi for InMemoryApi {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let mut store = self.store.lock().unwrap();
        store.enter(ApiAction::List)?;
        Ok(store.products.clone())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        let mut store = self.store.lock().unwrap();
        store.enter(ApiAction::Search)?;
        store.last_search = Some(query.to_string());
        let needle = query.to_lowercase();
        Ok(store
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product> {
        let mut store = self.store.lock().unwrap();
        store.enter(ApiAction::Get)?;
        store
            .products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| Store::not_found(ApiAction::Get))
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product> {
        let mut store = self.store.lock().unwrap();
        store.enter(ApiAction::Create)?;
        let product = Product {
            id: store.assign_id(),
            name: draft.name.clone(),
            cost: draft.cost,
            price: draft.price,
            quantityavailable: draft.quantityavailable,
        };
        store.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        store.enter(ApiAction::Update)?;
        let product = store
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| Store::not_found(ApiAction::Update))?;
        product.name.clone_from(&draft.name);
        product.cost = draft.cost;
        product.price = draft.price;
        product.quantityavailable = draft.quantityavailable;
        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        store.enter(ApiAction::Delete)?;
        let before = store.products.len();
        store.products.retain(|p| &p.id != id);
        if store.products.len() == before {
            return Err(Store::not_found(ApiAction::Delete));
        }
        Ok(())
    }
}

/// Types all four form inputs at once.
pub fn fill_form<A: ProductApi>(
    console: &mut Console<A>,
    name: &str,
    cost: &str,
    price: &str,
    quantity: &str,
) {
    console.edit_field(FormField::Name, name);
    console.edit_field(FormField::Cost, cost);
    console.edit_field(FormField::Price, price);
    console.edit_field(FormField::QuantityAvailable, quantity);
}

/// A request as received by [`serve_once`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path exactly as sent, still percent-encoded
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    /// The body parsed as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Accepts one connection on a random local port and answers it with `status` and
/// `body`.
///
/// Returns the base URL to point a client at, and a handle resolving to the request
/// that was received.
pub async fn serve_once(status: u16, body: &str) -> (String, JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();
        request
    });

    (base_url, handle)
}

/// Base URL of a local port with nothing listening on it.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);
    base_url
}

async fn read_request(stream: &mut TcpStream) -> RecordedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];

    loop {
        let read = stream.read(&mut chunk).await.unwrap();
        assert!(read > 0, "connection closed before the request was complete");
        buf.extend_from_slice(&chunk[..read]);

        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .map_or(0, |(_, value)| value.trim().parse::<usize>().unwrap());

        let body_start = head_end + 4;
        if buf.len() < body_start + content_length {
            continue;
        }

        let mut request_line = head.lines().next().unwrap().split_whitespace();
        return RecordedRequest {
            method: request_line.next().unwrap().to_string(),
            path: request_line.next().unwrap().to_string(),
            body: String::from_utf8_lossy(&buf[body_start..body_start + content_length])
                .to_string(),
        };
    }
}
