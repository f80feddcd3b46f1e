//! cardledger-ingest: PDF statement extraction and table reassembly into
//! description / amount line pairs.

pub mod extract;
pub mod parsers;
pub mod statement;
pub mod types;

pub use extract::{PageExtractor, PdfExtractPages, locate_sections};
pub use parsers::SectionReassembler;
pub use statement::{convert_pdf_to_txt, default_txt_path, statement_lines, write_line_pairs};
pub use types::{PageSection, StatementLayout};
