use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    quiet: bool,
}

impl Logger {
    fn new(prefix: Option<String>, quiet: bool) -> Self {
        Self { prefix, quiet }
    }

    pub fn format(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if self.quiet {
            return;
        }
        println!("{}", self.format(file, line, message));
    }
}

/// Installs the process-wide logger. Later calls keep the first configuration.
pub fn init_logger(prefix: Option<String>, quiet: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, quiet));
}

/// Messages logged before `init_logger` are dropped.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
