//! Header Renderer
//!
//! Turns compressed assets into C/C++ headers: one header per asset holding
//! the byte array, sizes and MIME string, and a master header with the
//! registry and a linear-scan `find_embedded_file` lookup.
//!
//! Output depends only on the assets and the dialect, so re-rendering
//! unchanged input is byte-identical.

use std::fmt::Write as _;

use crate::domain::entities::{EmbeddedAsset, GeneratedHeader};
use crate::domain::value_objects::HeaderDialect;

/// File name of the registry header
pub const MASTER_HEADER: &str = "embedded_web_assets.h";

const BYTES_PER_LINE: usize = 16;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderRenderer {
    dialect: HeaderDialect,
}

impl HeaderRenderer {
    pub fn new(dialect: HeaderDialect) -> Self {
        Self { dialect }
    }

    /// Render `embedded_<stem>.h` for one asset.
    pub fn render_asset(&self, asset: &EmbeddedAsset) -> GeneratedHeader {
        let id = asset.identifier();
        let filename = asset.filename();
        let (storage, progmem) = match self.dialect {
            HeaderDialect::Arduino => ("const", " PROGMEM"),
            HeaderDialect::EspIdf => ("static const", ""),
        };

        let mut out = String::new();
        let _ = writeln!(out, "// Auto-generated embedded web asset: {}", filename);
        let _ = writeln!(
            out,
            "// Original size: {} bytes, Compressed: {} bytes",
            asset.original_size(),
            asset.compressed_size()
        );
        out.push('\n');
        out.push_str("#pragma once\n\n");
        out.push_str("#include <stdint.h>\n");
        out.push_str("#include <stddef.h>\n\n");
        let _ = writeln!(out, "// Embedded {} (gzip compressed)", filename);
        let _ = writeln!(out, "{} uint8_t{} {}[] = {{", storage, progmem, id.data_symbol());
        let _ = writeln!(out, "{}", hex_lines(asset.data()));
        out.push_str("};\n\n");
        let _ = writeln!(
            out,
            "{} size_t {} = {};",
            storage,
            id.size_symbol(),
            asset.compressed_size()
        );
        let _ = writeln!(
            out,
            "{} size_t {} = {};",
            storage,
            id.original_size_symbol(),
            asset.original_size()
        );
        let _ = writeln!(
            out,
            "{} char {}[]{} = \"{}\";",
            storage,
            id.mime_symbol(),
            progmem,
            asset.mime()
        );

        GeneratedHeader::new(asset.header_file_name(), out)
    }

    /// Render `embedded_web_assets.h`, the registry of every embedded asset.
    ///
    /// Registry order follows `assets`.
    pub fn render_master(&self, assets: &[EmbeddedAsset]) -> GeneratedHeader {
        let idf = self.dialect.is_idf();

        let includes = assets
            .iter()
            .map(|a| format!("#include \"{}\"", a.header_file_name()))
            .collect::<Vec<_>>()
            .join("\n");

        let registry = assets
            .iter()
            .map(|a| {
                let id = a.identifier();
                format!(
                    "    {{\"{}\", {}, {}, {}}}",
                    a.filename(),
                    id.data_symbol(),
                    id.size_symbol(),
                    id.mime_symbol()
                )
            })
            .collect::<Vec<_>>()
            .join(",\n");

        let mut out = String::new();
        out.push_str("// Auto-generated master header for embedded web assets\n");
        out.push_str("// This file includes all embedded web assets and provides a registry\n\n");
        out.push_str("#pragma once\n\n");
        out.push_str("#include <stdint.h>\n");
        out.push_str("#include <stddef.h>\n");
        if idf {
            out.push_str("#include <string.h>\n");
        }
        out.push('\n');
        let _ = writeln!(out, "{}", includes);
        out.push('\n');
        out.push_str("// File registry entry\n");
        out.push_str("struct EmbeddedFile {\n");
        out.push_str("    const char* filename;\n");
        out.push_str("    const uint8_t* data;\n");
        out.push_str("    size_t size;\n");
        out.push_str("    const char* mime_type;\n");
        out.push_str("};\n\n");
        out.push_str("// Registry of all embedded files\n");
        if idf {
            out.push_str("const struct EmbeddedFile embedded_files[] = {\n");
        } else {
            out.push_str("const EmbeddedFile PROGMEM embedded_files[] = {\n");
        }
        let _ = writeln!(out, "{}", registry);
        out.push_str("};\n\n");
        let _ = writeln!(out, "const size_t embedded_files_count = {};", assets.len());
        out.push('\n');
        out.push_str("// Helper function to find file by name\n");
        if idf {
            out.push_str(
                "static inline const struct EmbeddedFile* find_embedded_file(const char* filename) {\n",
            );
            out.push_str("    for (size_t i = 0; i < embedded_files_count; i++) {\n");
            out.push_str("        if (strcmp(filename, embedded_files[i].filename) == 0) {\n");
            out.push_str("            return &embedded_files[i];\n");
            out.push_str("        }\n");
            out.push_str("    }\n");
            out.push_str("    return NULL;\n");
        } else {
            out.push_str("inline const EmbeddedFile* find_embedded_file(const char* filename) {\n");
            out.push_str("    for (size_t i = 0; i < embedded_files_count; i++) {\n");
            out.push_str(
                "        if (strcmp_P(filename, (const char*)pgm_read_ptr(&embedded_files[i].filename)) == 0) {\n",
            );
            out.push_str("            return &embedded_files[i];\n");
            out.push_str("        }\n");
            out.push_str("    }\n");
            out.push_str("    return nullptr;\n");
        }
        out.push_str("}\n");

        GeneratedHeader::new(MASTER_HEADER, out)
    }
}

/// Format bytes as a C array body: lower-case `0x..`, 16 per line, 4-space indent.
pub fn hex_lines(data: &[u8]) -> String {
    data.chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let bytes = chunk
                .iter()
                .map(|b| format!("0x{:02x}", b))
                .collect::<Vec<_>>()
                .join(", ");
            format!("    {}", bytes)
        })
        .collect::<Vec<_>>()
        .join(",\n")
}
