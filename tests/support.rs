use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::{Duration, Instant};

const FRAME_TERMINATOR: &[u8] = b"\n\n";

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl ServerHandle {
    /// Requests received so far, without their framing.
    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    /// Poll until at least `count` requests arrived or `timeout` elapses.
    pub fn wait_for(&self, count: usize, timeout: Duration) -> Vec<Vec<u8>> {
        let deadline = Instant::now().checked_add(timeout);
        loop {
            let received = self.received();
            let expired = deadline.is_none_or(|deadline| Instant::now() >= deadline);
            if received.len() >= count || expired {
                return received;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a raw TCP server that captures each framed request and replies `OK`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_capture_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => handle_client(stream, &sink),
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            received,
        },
    ))
}

fn handle_client(mut stream: TcpStream, sink: &Mutex<Vec<Vec<u8>>>) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut request = Vec::new();
    let mut buffer = [0u8; 1024];
    while !request.ends_with(FRAME_TERMINATOR) {
        match stream.read(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(read) => request.extend_from_slice(buffer.get(..read).unwrap_or_default()),
        }
    }
    if let Some(stripped) = request.strip_suffix(FRAME_TERMINATOR) {
        let stripped = stripped.to_vec();
        if let Ok(mut received) = sink.lock() {
            received.push(stripped);
        }
    }
    if stream
        .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK")
        .is_err()
    {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Port with nothing listening on it.
///
/// # Errors
///
/// Returns an error if a probe listener cannot be bound.
pub fn closed_port() -> Result<u16, String> {
    let listener =
        TcpListener::bind("127.0.0.1:0").map_err(|err| format!("bind probe failed: {}", err))?;
    listener
        .local_addr()
        .map(|addr| addr.port())
        .map_err(|err| format!("probe addr failed: {}", err))
}

/// Write a test file into `dir` and return its path as a string.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<String, String> {
    let path = dir.join(name);
    std::fs::write(&path, content).map_err(|err| format!("write {} failed: {}", name, err))?;
    Ok(path.to_string_lossy().into_owned())
}

/// Run the `httpfuzz` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_httpfuzz<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = bin_path(option_env!("CARGO_BIN_EXE_httpfuzz"), "httpfuzz")?;
    Command::new(bin)
        .args(args)
        .env("HTTPFUZZ_LOG", "error")
        .env_remove("HTTPFUZZ_HOST")
        .env_remove("HTTPFUZZ_TESTFILE")
        .env_remove("HTTPFUZZ_SEED")
        .output()
        .map_err(|err| format!("run httpfuzz failed: {}", err))
}

/// Run the `httpfuzz-replay` binary, feeding `script` on stdin.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed or stdin cannot be
/// written.
pub fn run_replay<I, S>(args: I, script: &str) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = bin_path(
        option_env!("CARGO_BIN_EXE_httpfuzz-replay"),
        "httpfuzz-replay",
    )?;
    let mut child = Command::new(bin)
        .args(args)
        .env("HTTPFUZZ_LOG", "error")
        .env_remove("HTTPFUZZ_HOST")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| format!("spawn httpfuzz-replay failed: {}", err))?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(script.as_bytes())
            .map_err(|err| format!("write stdin failed: {}", err))?;
    }
    child
        .wait_with_output()
        .map_err(|err| format!("wait httpfuzz-replay failed: {}", err))
}

fn bin_path(path: Option<&str>, name: &str) -> Result<String, String> {
    path.map_or_else(
        || Err(format!("CARGO_BIN_EXE_{} missing at compile time.", name)),
        |path| Ok(path.to_owned()),
    )
}

pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
