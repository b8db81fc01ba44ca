/// Default cap on document text embedded in a prompt. Flash-class models
/// accept far more, but court files past this point are annexes and receipts
/// that add little to an answer.
pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 30_000;

/// Assembles the Turkish legal-assistant prompts sent to the model.
///
/// The query layer treats prompts as opaque strings, so the document-context
/// cap lives here, applied before the text is embedded. Truncation is by
/// character, never mid code point.
pub struct PromptBuilder {
    max_document_chars: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DOCUMENT_CHARS)
    }
}

impl PromptBuilder {
    pub fn new(max_document_chars: usize) -> Self {
        Self { max_document_chars }
    }

    /// Question answering grounded in the uploaded document.
    pub fn document_question(&self, document_text: &str, question: &str) -> String {
        let context = truncate_chars(document_text, self.max_document_chars);
        format!(
            "Sen uzman bir Türk Hukuku asistanısın. Aşağıdaki belge metnine dayanarak \
             kullanıcının sorusunu cevapla.\nCevapların net, hukuki terminolojiye uygun ama \
             anlaşılır olsun. Belgede olmayan bir bilgi uydurma.\n\nBELGE METNİ:\n{context}\n\n\
             KULLANICI SORUSU:\n{question}"
        )
    }

    /// Statute text on demand, independent of any uploaded document.
    pub fn statute_lookup(&self, reference: &str) -> String {
        format!(
            "Sen uzman bir Türk Hukuku asistanısın. Aşağıda belirtilen kanun maddesinin \
             metnini ver ve kısaca açıkla.\n\nKANUN MADDESİ:\n{reference}"
        )
    }

    /// Case-law overview on a topic, independent of any uploaded document.
    pub fn case_law_summary(&self, topic: &str) -> String {
        format!(
            "Sen uzman bir Türk Hukuku asistanısın. Aşağıdaki konuyla ilgili emsal \
             niteliğindeki yargı kararlarını özetle ve dayandıkları ilkeleri belirt.\n\n\
             KONU:\n{topic}"
        )
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
