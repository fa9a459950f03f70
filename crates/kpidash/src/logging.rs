use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "kpidash.log";

/// Log size that triggers trimming on startup (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Tail kept after trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Drop everything but the newest `KEEP_SIZE` bytes once the log passes
/// `MAX_LOG_SIZE`. The kept tail starts on a whole line. Returns whether the
/// file was trimmed.
fn trim_log(log_path: &Path) -> io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= MAX_LOG_SIZE {
        return Ok(false);
    }

    let mut reader = BufReader::new(File::open(log_path)?);
    reader.seek(SeekFrom::Start(len - KEEP_SIZE))?;
    let mut partial_line = Vec::new();
    reader.read_until(b'\n', &mut partial_line)?;
    let mut tail = Vec::new();
    reader.read_to_end(&mut tail)?;
    drop(reader);

    let dropped = len - tail.len() as u64;
    let mut trimmed = format!("--- kpidash: trimmed {dropped} bytes of older entries ---\n").into_bytes();
    trimmed.append(&mut tail);
    fs::write(log_path, trimmed)?;
    Ok(true)
}

/// Hands out writers that share one append-mode log file.
#[derive(Clone)]
struct SharedLogFile {
    file: Arc<Mutex<File>>,
}

impl SharedLogFile {
    fn lock(&self) -> io::Result<MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))
    }
}

impl Write for SharedLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Default filter for both workspace crates at the given level.
pub fn default_filter(level: &str) -> String {
    format!("kpidash={level},kpidash_core={level}")
}

/// Initialize logging to `{data_dir}/kpidash.log`.
///
/// The terminal belongs to the UI, so nothing is written to stdout or stderr.
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    if let Err(e) = trim_log(&log_path) {
        eprintln!("kpidash: could not trim {}: {e}", log_path.display());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedLogFile {
                    file: Arc::new(Mutex::new(file)),
                })
                .with_ansi(false)
                .with_target(true)
                .with_thread_names(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "kpidash logging initialized");
    Ok(())
}
