use std::collections::BTreeMap;
use std::fmt;

/// 表单字段错误，字段名到提示信息的映射
///
/// 验证失败作为值返回给调用方逐字段展示，不会抛出。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// 没有错误时返回 `Ok(value)`
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// 修剪后的帖子内容至少需要的字符数
pub const MIN_POST_CONTENT_CHARS: usize = 10;

/// 检查帖子内容，返回修剪后的文本
pub fn post_content(content: &str, errors: &mut FieldErrors) -> String {
    let content = content.trim();
    if content.is_empty() {
        errors.insert("content", "Post content is required");
    } else if content.chars().count() < MIN_POST_CONTENT_CHARS {
        errors.insert("content", "Post must be at least 10 characters");
    }
    content.to_string()
}
