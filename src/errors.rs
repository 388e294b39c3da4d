use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    /// 网络层失败：无法连接、DNS、超时、读取中断等
    Transport(String),
    /// 协议层失败：服务端返回非 2xx 状态码
    HttpStatus { status: u16, message: String },
    Serialization(String),
    Config(String),
    Validation(String),
    FileOperation(String),
}

impl PagerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            PagerError::Transport(_) => "E001",
            PagerError::HttpStatus { .. } => "E002",
            PagerError::Serialization(_) => "E003",
            PagerError::Config(_) => "E004",
            PagerError::Validation(_) => "E005",
            PagerError::FileOperation(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            PagerError::Transport(_) => "Transport Error",
            PagerError::HttpStatus { .. } => "HTTP Status Error",
            PagerError::Serialization(_) => "Serialization Error",
            PagerError::Config(_) => "Configuration Error",
            PagerError::Validation(_) => "Validation Error",
            PagerError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            PagerError::Transport(msg) => msg,
            PagerError::HttpStatus { message, .. } => message,
            PagerError::Serialization(msg) => msg,
            PagerError::Config(msg) => msg,
            PagerError::Validation(msg) => msg,
            PagerError::FileOperation(msg) => msg,
        }
    }

    /// HTTP 状态码（仅协议层错误有）
    pub fn status(&self) -> Option<u16> {
        match self {
            PagerError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 是否为一次加载失败（网络或协议层），而不是本地配置问题
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            PagerError::Transport(_) | PagerError::HttpStatus { .. } | PagerError::Serialization(_)
        )
    }

    /// 格式化为彩色输出（用于 CLI）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        match self {
            PagerError::HttpStatus { status, message } => {
                format!("{} ({}): {}", self.error_type(), status, message)
            }
            _ => format!("{}: {}", self.error_type(), self.message()),
        }
    }
}

impl fmt::Display for PagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PagerError {}

// 便捷的构造函数
impl PagerError {
    pub fn transport<T: Into<String>>(msg: T) -> Self {
        PagerError::Transport(msg.into())
    }

    pub fn http_status<T: Into<String>>(status: u16, msg: T) -> Self {
        PagerError::HttpStatus {
            status,
            message: msg.into(),
        }
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        PagerError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        PagerError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        PagerError::Validation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        PagerError::FileOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for PagerError {
    fn from(err: std::io::Error) -> Self {
        PagerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PagerError {
    fn from(err: serde_json::Error) -> Self {
        PagerError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for PagerError {
    fn from(err: config::ConfigError) -> Self {
        PagerError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PagerError {
    fn from(err: toml::ser::Error) -> Self {
        PagerError::Serialization(err.to_string())
    }
}

impl From<ureq::Error> for PagerError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => {
                PagerError::http_status(status, format!("server responded with HTTP {}", status))
            }
            other => PagerError::Transport(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PagerError>;
