use crate::i18n::Language;

/// Values substituted into a share message.
pub(crate) struct MessageFields<'a> {
    pub amount: &'a str,
    pub source_label: &'a str,
    pub target_label: &'a str,
    pub rate: &'a str,
    pub total: &'a str,
}

pub(crate) fn render(language: Language, f: &MessageFields<'_>) -> String {
    match language {
        Language::Ar => [
            "تفاصيل التحويل:".to_string(),
            format!("المبلغ المرسل: {} {}", f.amount, f.source_label),
            format!("العملة المستلمة: {}", f.target_label),
            format!(
                "السعر المستخدم: 1 {} = {} {}",
                f.source_label, f.rate, f.target_label
            ),
            format!("المبلغ المستلم: {} {}", f.total, f.target_label),
        ]
        .join("\n"),
        Language::En => [
            "Transfer Details:".to_string(),
            format!("Amount Sent: {} {}", f.amount, f.source_label),
            format!("Receiving Currency: {}", f.target_label),
            format!(
                "Exchange Rate Used: 1 {} = {} {}",
                f.source_label, f.rate, f.target_label
            ),
            format!("Amount to Receive: {} {}", f.total, f.target_label),
        ]
        .join("\n"),
    }
}
