//! Fixed report wording in the two supported label sets.

use crate::model::Direction;

/// Label set, chosen once from the shaping capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Script {
    /// English labels, left-to-right
    Latin,
    /// Persian labels, right-to-left
    Persian,
}

impl Script {
    pub(crate) fn for_shaping(enabled: bool) -> Self {
        if enabled {
            Script::Persian
        } else {
            Script::Latin
        }
    }

    pub(crate) fn direction(self) -> Direction {
        match self {
            Script::Latin => Direction::Ltr,
            Script::Persian => Direction::Rtl,
        }
    }

    /// Metadata title of the output file.
    pub(crate) fn document_title(self) -> &'static str {
        "OCR Extraction Results"
    }

    pub(crate) fn page_header(self) -> &'static str {
        match self {
            Script::Latin => "OCR Extraction Results",
            Script::Persian => "نتایج استخراج OCR",
        }
    }

    pub(crate) fn page_footer(self, number: u32) -> String {
        match self {
            Script::Latin => format!("Page {}", number),
            Script::Persian => format!("صفحه {}", number),
        }
    }

    pub(crate) fn report_title(self, timestamp: &str) -> String {
        match self {
            Script::Latin => format!("OCR Results - {}", timestamp),
            Script::Persian => format!("نتایج OCR - {}", timestamp),
        }
    }

    pub(crate) fn total_files(self, total: usize) -> String {
        match self {
            Script::Latin => format!("Total files processed: {}", total),
            Script::Persian => format!("تعداد کل فایل‌ها: {}", total),
        }
    }

    pub(crate) fn successful(self, count: usize) -> String {
        match self {
            Script::Latin => format!("Successful extractions: {}", count),
            Script::Persian => format!("استخراج موفق: {}", count),
        }
    }

    pub(crate) fn file_title(self, ordinal: usize, name: &str) -> String {
        match self {
            Script::Latin => format!("File {}: {}", ordinal, name),
            Script::Persian => format!("فایل {}: {}", ordinal, name),
        }
    }

    pub(crate) fn char_count(self, count: usize) -> String {
        match self {
            Script::Latin => format!("Characters extracted: {}", count),
            Script::Persian => format!("تعداد کاراکترها: {}", count),
        }
    }

    pub(crate) fn no_text(self) -> &'static str {
        match self {
            Script::Latin => "No text was extracted from this file",
            Script::Persian => "هیچ متنی از این فایل استخراج نشد",
        }
    }
}
