use std::ffi::OsStr;
use std::path::Path;

pub trait PathExt {
    fn is_xml_file(&self) -> bool;
    fn file_name_lossy(&self) -> String;
    fn file_stem_lossy(&self) -> String;
}

impl PathExt for Path {
    fn is_xml_file(&self) -> bool {
        self.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
    }

    fn file_name_lossy(&self) -> String {
        self.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn file_stem_lossy(&self) -> String {
        self.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
