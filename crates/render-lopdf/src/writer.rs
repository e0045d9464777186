use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Buffers PDF objects by id and serialises them in one deterministic pass.
///
/// Object ids 1-3 are reserved for the shared resources, the page tree and
/// the catalog. Everything else is allocated in call order, so the same
/// sequence of calls always yields the same bytes.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    max_id: u32,
    catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    info_id: Option<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        let resources_id = (1, 0);
        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            max_id: 3,
            catalog_id: (3, 0),
            pages_id: (2, 0),
            resources_id,
            page_ids: Vec::new(),
            info_id: None,
            buffered_objects,
        })
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        self.max_id += 1;
        let id = (self.max_id, 0);
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, lopdf::Error> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    /// Attaches a document information dictionary to the trailer.
    pub fn set_info(&mut self, info: Dictionary) {
        let id = self.buffer_object(info.into());
        self.info_id = Some(id);
    }

    pub fn finish(mut self) -> io::Result<W> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages_dict.into());
        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffered_objects.insert(self.catalog_id, catalog_dict.into());

        let mut offsets = BTreeMap::new();
        for (id, object) in &self.buffered_objects {
            offsets.insert(id.0, self.writer.stream_position()?);
            writeln!(self.writer, "{} {} obj", id.0, id.1)?;
            write_object(&mut self.writer, object)?;
            writeln!(self.writer, "\nendobj")?;
        }

        // Every id up to max_id is allocated, so one subsection covers them.
        let xref_start = self.writer.stream_position()?;
        let size = self.max_id + 1;
        writeln!(self.writer, "xref\n0 {}", size)?;
        writeln!(self.writer, "0000000000 65535 f ")?;
        for id in 1..size {
            match offsets.get(&id) {
                Some(offset) => writeln!(self.writer, "{:010} 00000 n ", offset)?,
                None => writeln!(self.writer, "0000000000 65535 f ")?,
            }
        }

        let mut trailer = dictionary! { "Size" => size as i64, "Root" => self.catalog_id };
        if let Some(info_id) = self.info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        write_dictionary(&mut self.writer, &trailer)?;
        write!(self.writer, "\nstartxref\n{}\n%%EOF", xref_start)?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Serialises the object kinds the resume writer produces. Strings are
/// always written as escaped literals.
fn write_object(out: &mut dyn Write, object: &Object) -> io::Result<()> {
    match object {
        Object::Null => out.write_all(b"null"),
        Object::Boolean(b) => write!(out, "{}", b),
        Object::Integer(i) => write!(out, "{}", i),
        Object::Real(r) => write!(out, "{}", format_real(*r)),
        Object::Name(name) => {
            out.write_all(b"/")?;
            out.write_all(name)
        }
        Object::String(bytes, _) => {
            out.write_all(b"(")?;
            for &byte in bytes {
                if matches!(byte, b'(' | b')' | b'\\') {
                    out.write_all(b"\\")?;
                }
                out.write_all(&[byte])?;
            }
            out.write_all(b")")
        }
        Object::Array(items) => {
            out.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_all(b" ")?;
                }
                write_object(out, item)?;
            }
            out.write_all(b"]")
        }
        Object::Dictionary(dict) => write_dictionary(out, dict),
        Object::Stream(stream) => {
            let mut dict = stream.dict.clone();
            dict.set("Length", stream.content.len() as i64);
            write_dictionary(out, &dict)?;
            out.write_all(b"\nstream\n")?;
            out.write_all(&stream.content)?;
            out.write_all(b"\nendstream")
        }
        Object::Reference(id) => write!(out, "{} {} R", id.0, id.1),
    }
}

/// Keys are sorted so output does not depend on insertion order.
fn write_dictionary(out: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
    out.write_all(b"<<")?;
    let sorted: BTreeMap<_, _> = dict.iter().collect();
    for (key, value) in sorted {
        out.write_all(b"/")?;
        out.write_all(key)?;
        out.write_all(b" ")?;
        write_object(out, value)?;
        out.write_all(b" ")?;
    }
    out.write_all(b">>")
}

/// Three decimals with trailing zeros dropped, e.g. `595.276` or `12`.
fn format_real(value: f32) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
