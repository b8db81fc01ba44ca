use adliye::application::services::PromptBuilder;

#[test]
fn given_document_and_question_when_building_then_both_embedded() {
    let builder = PromptBuilder::default();

    let prompt = builder.document_question("BELGE ICERIGI BURADA", "Davaci ne talep etmis?");

    assert!(prompt.contains("BELGE ICERIGI BURADA"));
    assert!(prompt.contains("Davaci ne talep etmis?"));
    assert!(prompt.contains("BELGE METNİ"));
}

#[test]
fn given_oversized_document_when_building_then_context_capped() {
    let builder = PromptBuilder::new(10);
    let document = "0123456789ABCDEF";

    let prompt = builder.document_question(document, "soru");

    assert!(prompt.contains("0123456789"));
    assert!(!prompt.contains("ABCDEF"));
}

#[test]
fn given_multibyte_text_when_truncating_then_cut_falls_on_char_boundary() {
    let builder = PromptBuilder::new(5);
    // ğ and ç are two bytes each; a byte-indexed cut would panic.
    let document = "ağaçlı yol kenarı";

    let prompt = builder.document_question(document, "soru");

    assert!(prompt.contains("ağaçl"));
    assert!(!prompt.contains("ağaçlı"));
}

#[test]
fn given_short_document_when_building_then_text_untouched() {
    let builder = PromptBuilder::default();
    let document = "kısa metin";

    let prompt = builder.document_question(document, "soru");

    assert!(prompt.contains("kısa metin"));
}

#[test]
fn given_statute_reference_when_building_then_reference_embedded() {
    let builder = PromptBuilder::default();

    let prompt = builder.statute_lookup("TBK madde 344");

    assert!(prompt.contains("TBK madde 344"));
    assert!(prompt.contains("KANUN MADDESİ"));
}

#[test]
fn given_case_law_topic_when_building_then_topic_embedded() {
    let builder = PromptBuilder::default();

    let prompt = builder.case_law_summary("kira bedelinin uyarlanması");

    assert!(prompt.contains("kira bedelinin uyarlanması"));
    assert!(prompt.contains("KONU"));
}
