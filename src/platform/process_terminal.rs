//! Process-based terminal implementation (stdin/stdout of the current tty).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex, MutexGuard,
};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::EnvConfig;
use crate::core::terminal::Terminal;

#[cfg(unix)]
use libc::{self, c_int};
#[cfg(unix)]
use once_cell::sync::OnceCell;
#[cfg(unix)]
use signal_hook::iterator::Signals;

type InputHandler = Box<dyn FnMut(String) + Send>;
type ResizeHandler = Arc<Mutex<Option<Box<dyn FnMut() + Send>>>>;

/// How long a chunk ending in a partial escape sequence waits for its tail.
const ESCAPE_TAIL_MS: i32 = 10;

/// Cooked-mode settings captured before the first switch to raw mode, for the crash hooks.
#[cfg(unix)]
static SAVED_TERMIOS: OnceCell<libc::termios> = OnceCell::new();

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_millis() as u64
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Whether `data` ends in an escape sequence whose final byte has not arrived yet.
pub(crate) fn ends_with_partial_escape(data: &[u8]) -> bool {
    let Some(esc) = data.iter().rposition(|&byte| byte == 0x1b) else {
        return false;
    };
    let tail = &data[esc..];
    match tail {
        [0x1b] => true,
        [0x1b, b'O'] => true,
        [0x1b, b'[', rest @ ..] => !rest.iter().any(|byte| (0x40..=0x7e).contains(byte)),
        _ => false,
    }
}

/// Splits `bytes` into the longest valid UTF-8 prefix and an incomplete trailing remainder.
pub(crate) fn take_utf8_prefix(bytes: &mut Vec<u8>) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            let text = text.to_string();
            bytes.clear();
            text
        }
        Err(error) if error.error_len().is_none() => {
            let valid = error.valid_up_to();
            let rest = bytes.split_off(valid);
            let text = String::from_utf8_lossy(bytes).into_owned();
            *bytes = rest;
            text
        }
        Err(_) => {
            let text = String::from_utf8_lossy(bytes).into_owned();
            bytes.clear();
            text
        }
    }
}

#[cfg(unix)]
fn write_all_fd_with<FWrite>(fd: c_int, bytes: &[u8], mut write_once: FWrite) -> std::io::Result<()>
where
    FWrite: FnMut(c_int, &[u8]) -> std::io::Result<usize>,
{
    let mut written = 0;
    while written < bytes.len() {
        match write_once(fd, &bytes[written..]) {
            Ok(0) => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "write returned 0",
                ));
            }
            Ok(count) => {
                written += count.min(bytes.len() - written);
            }
            Err(err)
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
                ) =>
            {
                continue;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

#[cfg(unix)]
fn write_fd(fd: c_int, data: &str) -> std::io::Result<()> {
    if data.is_empty() {
        return Ok(());
    }
    write_all_fd_with(fd, data.as_bytes(), |fd, buf| {
        let result = unsafe { libc::write(fd, buf.as_ptr() as *const libc::c_void, buf.len()) };
        if result < 0 {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(result as usize)
        }
    })
}

#[cfg(unix)]
fn read_winsize(fd: c_int) -> Option<(u16, u16)> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size) };
    if result == 0 && size.ws_col > 0 && size.ws_row > 0 {
        Some((size.ws_col, size.ws_row))
    } else {
        None
    }
}

#[cfg(unix)]
fn poll_readable(fd: c_int, timeout_ms: i32) -> bool {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let result = unsafe { libc::poll(&mut fds, 1, timeout_ms) };
    result > 0 && (fds.revents & libc::POLLIN) != 0
}

#[cfg(unix)]
fn read_available(fd: c_int, buffer: &mut [u8]) -> Option<usize> {
    let read_len = unsafe { libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len()) };
    if read_len <= 0 {
        None
    } else {
        Some(read_len as usize)
    }
}

#[cfg(unix)]
fn get_termios(fd: c_int) -> std::io::Result<libc::termios> {
    let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };
    if result != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(termios)
}

#[cfg(unix)]
fn set_termios(fd: c_int, termios: &libc::termios) -> std::io::Result<()> {
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, termios) };
    if result != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(unix)]
pub struct ProcessTerminal {
    stdin_fd: c_int,
    stdout_fd: c_int,
    original_termios: Option<libc::termios>,
    input_handler: Arc<Mutex<Option<InputHandler>>>,
    resize_handler: ResizeHandler,
    input_thread: Option<JoinHandle<()>>,
    stop_flag: Arc<AtomicBool>,
    drain_mode: Arc<AtomicBool>,
    last_input_time: Arc<AtomicU64>,
    write_log_path: Option<PathBuf>,
    write_log_failed: bool,
    resize_signal_handle: Option<signal_hook::iterator::Handle>,
    resize_thread: Option<JoinHandle<()>>,
}

#[cfg(unix)]
impl ProcessTerminal {
    pub fn new() -> Self {
        Self::with_config(&EnvConfig::from_env())
    }

    pub fn with_config(config: &EnvConfig) -> Self {
        Self {
            stdin_fd: libc::STDIN_FILENO,
            stdout_fd: libc::STDOUT_FILENO,
            original_termios: None,
            input_handler: Arc::new(Mutex::new(None)),
            resize_handler: Arc::new(Mutex::new(None)),
            input_thread: None,
            stop_flag: Arc::new(AtomicBool::new(false)),
            drain_mode: Arc::new(AtomicBool::new(false)),
            last_input_time: Arc::new(AtomicU64::new(now_ms())),
            write_log_path: config.write_log.as_ref().map(PathBuf::from),
            write_log_failed: false,
            resize_signal_handle: None,
            resize_thread: None,
        }
    }

    fn enable_raw_mode(&mut self) -> std::io::Result<()> {
        let original = match self.original_termios {
            Some(original) => original,
            None => {
                let original = get_termios(self.stdin_fd)?;
                self.original_termios = Some(original);
                let _ = SAVED_TERMIOS.set(original);
                original
            }
        };
        let mut raw = original;
        unsafe {
            libc::cfmakeraw(&mut raw);
        }
        set_termios(self.stdin_fd, &raw)
    }

    fn restore_raw_mode(&mut self) -> std::io::Result<()> {
        if let Some(original) = self.original_termios.as_ref() {
            set_termios(self.stdin_fd, original)?;
        }
        Ok(())
    }

    fn start_input_thread(&mut self) {
        let stdin_fd = self.stdin_fd;
        let input_handler = Arc::clone(&self.input_handler);
        let stop_flag = Arc::clone(&self.stop_flag);
        let drain_mode = Arc::clone(&self.drain_mode);
        let last_input_time = Arc::clone(&self.last_input_time);

        self.input_thread = Some(thread::spawn(move || {
            let mut buffer = [0u8; 4096];
            let mut pending: Vec<u8> = Vec::new();

            while !stop_flag.load(Ordering::SeqCst) {
                if !poll_readable(stdin_fd, 50) {
                    continue;
                }
                let Some(read_len) = read_available(stdin_fd, &mut buffer) else {
                    continue;
                };
                last_input_time.store(now_ms(), Ordering::SeqCst);
                pending.extend_from_slice(&buffer[..read_len]);

                while ends_with_partial_escape(&pending) && poll_readable(stdin_fd, ESCAPE_TAIL_MS)
                {
                    match read_available(stdin_fd, &mut buffer) {
                        Some(more) => pending.extend_from_slice(&buffer[..more]),
                        None => break,
                    }
                }

                let chunk = take_utf8_prefix(&mut pending);
                if chunk.is_empty() || drain_mode.load(Ordering::SeqCst) {
                    continue;
                }

                let mut handler = lock_unpoisoned(&input_handler);
                if let Some(handler) = handler.as_mut() {
                    handler(chunk);
                }
            }
        }));
    }

    fn stop_input_thread(&mut self) {
        self.stop_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.input_thread.take() {
            let _ = handle.join();
        }
    }

    fn start_resize_thread(&mut self) -> std::io::Result<()> {
        let mut signals = Signals::new([libc::SIGWINCH])?;
        let handle = signals.handle();
        let resize_handler = Arc::clone(&self.resize_handler);

        let thread = thread::spawn(move || {
            for _ in signals.forever() {
                let mut handler = lock_unpoisoned(&resize_handler);
                if let Some(handler) = handler.as_mut() {
                    handler();
                }
            }
        });

        self.resize_signal_handle = Some(handle);
        self.resize_thread = Some(thread);
        Ok(())
    }

    fn stop_resize_thread(&mut self) {
        if let Some(handle) = self.resize_signal_handle.take() {
            handle.close();
        }
        if let Some(thread) = self.resize_thread.take() {
            let _ = thread.join();
        }
    }

    fn clear_handlers(&self) {
        *lock_unpoisoned(&self.input_handler) = None;
        *lock_unpoisoned(&self.resize_handler) = None;
    }

    fn append_write_log(&mut self, data: &str) {
        if self.write_log_failed {
            return;
        }
        if let Some(path) = self.write_log_path.as_ref() {
            let result = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .and_then(|mut file| file.write_all(data.as_bytes()));
            if let Err(error) = result {
                tracing::warn!(path = %path.display(), %error, "disabling terminal write log");
                self.write_log_failed = true;
            }
        }
    }
}

#[cfg(unix)]
impl Default for ProcessTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
impl Terminal for ProcessTerminal {
    fn start(
        &mut self,
        on_input: Box<dyn FnMut(String) + Send>,
        on_resize: Box<dyn FnMut() + Send>,
    ) -> std::io::Result<()> {
        *lock_unpoisoned(&self.input_handler) = Some(on_input);
        *lock_unpoisoned(&self.resize_handler) = Some(on_resize);

        self.stop_flag.store(false, Ordering::SeqCst);
        self.drain_mode.store(false, Ordering::SeqCst);
        self.last_input_time.store(now_ms(), Ordering::SeqCst);

        if let Err(err) = self.enable_raw_mode() {
            self.clear_handlers();
            return Err(err);
        }

        if let Err(err) = self.start_resize_thread() {
            self.clear_handlers();
            let _ = self.restore_raw_mode();
            return Err(err);
        }
        self.start_input_thread();
        tracing::debug!("process terminal started");

        Ok(())
    }

    fn stop(&mut self) -> std::io::Result<()> {
        self.stop_input_thread();
        self.stop_resize_thread();
        self.clear_handlers();

        // Flush input before leaving raw mode to avoid buffered bytes leaking to the shell.
        let _ = unsafe { libc::tcflush(self.stdin_fd, libc::TCIFLUSH) };

        tracing::debug!("process terminal stopped");
        self.restore_raw_mode()
    }

    fn drain_input(&mut self, max_ms: u64, idle_ms: u64) {
        self.drain_mode.store(true, Ordering::SeqCst);
        self.last_input_time.store(now_ms(), Ordering::SeqCst);

        let end_time = now_ms().saturating_add(max_ms);
        loop {
            let now = now_ms();
            if now >= end_time {
                break;
            }
            let last_input = self.last_input_time.load(Ordering::SeqCst);
            if now.saturating_sub(last_input) >= idle_ms {
                break;
            }

            let remaining = end_time.saturating_sub(now);
            thread::sleep(Duration::from_millis(idle_ms.min(remaining).max(1)));
        }

        self.drain_mode.store(false, Ordering::SeqCst);
    }

    fn write(&mut self, data: &str) {
        if let Err(error) = write_fd(self.stdout_fd, data) {
            tracing::error!(%error, "failed to write to terminal");
        }
        self.append_write_log(data);
    }

    fn columns(&self) -> u16 {
        read_winsize(self.stdout_fd)
            .map(|(cols, _)| cols)
            .unwrap_or(80)
    }

    fn rows(&self) -> u16 {
        read_winsize(self.stdout_fd)
            .map(|(_, rows)| rows)
            .unwrap_or(24)
    }
}

/// Signal handler guard for cleanup hooks.
#[cfg(unix)]
pub struct SignalHookGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<JoinHandle<()>>,
}

#[cfg(unix)]
impl Drop for SignalHookGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Install a SIGINT/SIGTERM hook. `cleanup` runs at most once.
#[cfg(unix)]
pub fn install_signal_handlers<F>(cleanup: F) -> std::io::Result<SignalHookGuard>
where
    F: Fn() + Send + Sync + 'static,
{
    let ran = Arc::new(AtomicBool::new(false));
    let mut signals = Signals::new([libc::SIGINT, libc::SIGTERM])?;
    let handle = signals.handle();

    let thread = thread::spawn(move || {
        for _ in signals.forever() {
            if !ran.swap(true, Ordering::SeqCst) {
                cleanup();
            }
        }
    });

    Ok(SignalHookGuard {
        handle,
        thread: Some(thread),
    })
}

/// Chain `cleanup` in front of the current panic hook so a panic never leaves the tty raw.
pub fn install_panic_hook<F>(cleanup: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = std::panic::take_hook();
    let ran = AtomicBool::new(false);
    std::panic::set_hook(Box::new(move |info| {
        if !ran.swap(true, Ordering::SeqCst) {
            cleanup();
        }
        previous(info);
    }));
}

/// Best-effort restore used from signal and panic hooks, where the runtime is unreachable.
///
/// Writes `sequence` to stdout and puts stdin back into the mode it had before raw mode.
#[cfg(unix)]
pub fn emergency_restore(sequence: &str) {
    let _ = write_fd(libc::STDOUT_FILENO, sequence);
    if let Some(original) = SAVED_TERMIOS.get() {
        let _ = set_termios(libc::STDIN_FILENO, original);
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::{ends_with_partial_escape, take_utf8_prefix, write_all_fd_with};
    use std::io;

    #[test]
    fn partial_escape_detection() {
        assert!(ends_with_partial_escape(b"abc\x1b"));
        assert!(ends_with_partial_escape(b"\x1b["));
        assert!(ends_with_partial_escape(b"\x1b[1;5"));
        assert!(ends_with_partial_escape(b"\x1bO"));
        assert!(!ends_with_partial_escape(b"\x1b[A"));
        assert!(!ends_with_partial_escape(b"plain"));
        assert!(!ends_with_partial_escape(b"\x1bOP"));
    }

    #[test]
    fn utf8_prefix_keeps_incomplete_tail() {
        let mut bytes = "hi📧".as_bytes().to_vec();
        let tail = bytes.split_off(bytes.len() - 2);
        let text = take_utf8_prefix(&mut bytes);
        assert_eq!(text, "hi");
        assert_eq!(bytes.len(), 2);

        bytes.extend_from_slice(&tail);
        assert_eq!(take_utf8_prefix(&mut bytes), "📧");
        assert!(bytes.is_empty());
    }

    #[test]
    fn write_all_fd_with_retries_on_eintr_and_writes_all_bytes() {
        let mut attempts = 0;
        let mut written = Vec::new();
        let result = write_all_fd_with(1, b"hello", |_, buf| {
            attempts += 1;
            if attempts == 1 {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            written.extend_from_slice(buf);
            Ok(buf.len())
        });

        assert!(result.is_ok());
        assert_eq!(written, b"hello");
        assert_eq!(attempts, 2);
    }

    #[test]
    fn write_all_fd_with_handles_partial_writes() {
        let mut written = Vec::new();
        let result = write_all_fd_with(1, b"abcdef", |_, buf| {
            let take = buf.len().min(2);
            written.extend_from_slice(&buf[..take]);
            Ok(take)
        });

        assert!(result.is_ok());
        assert_eq!(written, b"abcdef");
    }

    #[test]
    fn write_all_fd_with_reports_write_zero() {
        let result = write_all_fd_with(1, b"abc", |_, _| Ok(0));
        assert_eq!(
            result.expect_err("zero-length write must fail").kind(),
            io::ErrorKind::WriteZero
        );
    }
}
