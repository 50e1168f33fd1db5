//! Minimal HTTP/1.1 server emulating the two PostgREST tables for integration tests.
//!
//! Understands `GET /rest/v1/<table>?<col>=eq.<v>&select=*`, `POST` (insert,
//! echoes the row in an array), `PATCH ...?id=eq.<v>` and `DELETE ...?id=eq.<v>`.
//! Requests without the expected `apikey` get 401.

use serde_json::{json, Map, Value};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub const API_KEY: &str = "test-anon-key";

#[derive(Debug, Clone, Default)]
pub struct RestServerOptions {
    /// Answer every request with this method using the given status.
    pub fail: Option<(&'static str, u16)>,
    /// Answer inserts with `[]` instead of the created row.
    pub empty_inserts: bool,
}

/// A request as seen by the server, kept for assertions.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Seen {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct Tables {
    lists: Vec<Value>,
    products: Vec<Value>,
    next_id: i64,
    seen: Vec<Seen>,
}

#[derive(Clone)]
pub struct RestServer {
    pub base_url: String,
    tables: Arc<Mutex<Tables>>,
}

impl RestServer {
    pub fn seen(&self) -> Vec<Seen> {
        self.tables.lock().unwrap().seen.clone()
    }

    pub fn last(&self) -> Seen {
        self.seen().pop().expect("no request seen")
    }

    pub fn products(&self) -> Vec<Value> {
        self.tables.lock().unwrap().products.clone()
    }
}

pub fn start() -> RestServer {
    start_with_options(RestServerOptions::default())
}

/// Starts the server on an ephemeral port in a background thread.
pub fn start_with_options(opts: RestServerOptions) -> RestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let tables = Arc::new(Mutex::new(Tables::default()));
    let server = RestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        tables: Arc::clone(&tables),
    };
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let tables = Arc::clone(&tables);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &tables, &opts));
        }
    });
    server
}

fn read_request(stream: &TcpStream) -> Option<Seen> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    loop {
        let mut h = String::new();
        if reader.read_line(&mut h).ok()? == 0 {
            break;
        }
        let h = h.trim_end();
        if h.is_empty() {
            break;
        }
        if let Some((k, v)) = h.split_once(':') {
            let (k, v) = (k.trim().to_string(), v.trim().to_string());
            if k.eq_ignore_ascii_case("content-length") {
                content_length = v.parse().unwrap_or(0);
            }
            headers.push((k, v));
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;
    Some(Seen {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

fn respond(mut stream: TcpStream, status: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn handle(stream: TcpStream, tables: &Mutex<Tables>, opts: &RestServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let Some(req) = read_request(&stream) else {
        return;
    };
    let mut t = tables.lock().unwrap();
    t.seen.push(req.clone());

    if req.header("apikey") != Some(API_KEY) {
        drop(t);
        respond(stream, "401 Unauthorized", r#"{"message":"Invalid API key"}"#);
        return;
    }
    if let Some((method, code)) = opts.fail {
        if req.method == method {
            drop(t);
            let status = format!("{} Injected Failure", code);
            respond(stream, &status, r#"{"message":"boom"}"#);
            return;
        }
    }

    let (path, query) = req
        .target
        .split_once('?')
        .unwrap_or((req.target.as_str(), ""));
    let table = path.trim_start_matches("/rest/v1/").to_string();
    let filter = query
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k != "select")
        .and_then(|(k, v)| v.strip_prefix("eq.").map(|v| (k.to_string(), v.to_string())));

    let Tables {
        lists,
        products,
        next_id,
        ..
    } = &mut *t;
    let rows = match table.as_str() {
        "Winkelwagens" => lists,
        "Products" => products,
        _ => {
            drop(t);
            respond(stream, "404 Not Found", r#"{"message":"relation does not exist"}"#);
            return;
        }
    };
    let matches = |row: &Value| match &filter {
        Some((col, v)) => row.get(col).map(|x| value_text(x) == *v).unwrap_or(false),
        None => true,
    };

    match req.method.as_str() {
        "GET" => {
            let out: Vec<Value> = rows.iter().filter(|&r| matches(r)).cloned().collect();
            let body = Value::Array(out).to_string();
            drop(t);
            respond(stream, "200 OK", &body);
        }
        "POST" => {
            let mut row: Map<String, Value> = match serde_json::from_str(&req.body) {
                Ok(Value::Object(m)) => m,
                _ => {
                    drop(t);
                    respond(stream, "400 Bad Request", r#"{"message":"bad json"}"#);
                    return;
                }
            };
            *next_id += 1;
            row.insert("id".into(), json!(*next_id));
            let row = Value::Object(row);
            rows.push(row.clone());
            let body = if opts.empty_inserts {
                "[]".to_string()
            } else {
                Value::Array(vec![row]).to_string()
            };
            drop(t);
            respond(stream, "201 Created", &body);
        }
        "PATCH" => {
            let patch: Map<String, Value> = serde_json::from_str(&req.body).unwrap_or_default();
            let mut out = Vec::new();
            for row in rows.iter_mut().filter(|r| matches(&**r)) {
                if let Value::Object(m) = row {
                    for (k, v) in &patch {
                        m.insert(k.clone(), v.clone());
                    }
                }
                out.push(row.clone());
            }
            let body = Value::Array(out).to_string();
            drop(t);
            respond(stream, "200 OK", &body);
        }
        "DELETE" => {
            rows.retain(|r| !matches(r));
            drop(t);
            respond(stream, "204 No Content", "");
        }
        _ => {
            drop(t);
            respond(stream, "405 Method Not Allowed", "");
        }
    }
}

fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
