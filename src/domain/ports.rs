use crate::utils::error::Result;

pub trait Storage {
    /// Read a whole file. A missing file is reported as `BoardingError::NotFound`.
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn header_token(&self) -> &str;
    fn show_details(&self) -> bool;
    fn json_output(&self) -> bool;
}
