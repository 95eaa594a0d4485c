//! Document Templates
//!
//! The fixed set of cards shown in the carousel. A card is a pure function of
//! the record, the saved signature and the card index.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::Record;

/// Where a field's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Name,
    DateOfBirth,
    Fixed(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub value: FieldValue,
}

#[derive(Debug, Clone, Copy)]
pub struct DocumentTemplate {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    /// Show the signature slot after the fields
    pub signature: bool,
}

const fn field(label: &'static str, value: FieldValue) -> FieldSpec {
    FieldSpec { label, value }
}

pub const DOCUMENTS: &[DocumentTemplate] = &[
    DocumentTemplate {
        title: "Паспорт громадянина України",
        fields: &[field("ПІБ", FieldValue::Name), field("Дата народження", FieldValue::DateOfBirth)],
        signature: true,
    },
    DocumentTemplate {
        title: "ІПН (Податковий номер)",
        fields: &[field("ПІБ", FieldValue::Name), field("Код", FieldValue::Fixed("1234567890"))],
        signature: false,
    },
    DocumentTemplate {
        title: "Студентський квиток",
        fields: &[
            field("ПІБ", FieldValue::Name),
            field("Навчальний заклад", FieldValue::Fixed("Університет Мемів")),
        ],
        signature: false,
    },
    DocumentTemplate {
        title: "COVID-сертифікат",
        fields: &[
            field("Сертифікат", FieldValue::Fixed("Вакцинований від дурості")),
            field("Дійсний до", FieldValue::Fixed("12.12.2030")),
        ],
        signature: false,
    },
    DocumentTemplate {
        title: "Повістка до Космічних військ",
        fields: &[
            field("ПІБ", FieldValue::Name),
            field("Частина", FieldValue::Fixed("Орбіта Пельменна, сектор D")),
        ],
        signature: false,
    },
    DocumentTemplate {
        title: "Субсидія на пельмені",
        fields: &[field("ПІБ", FieldValue::Name), field("Сума", FieldValue::Fixed("₴9999.99"))],
        signature: false,
    },
];

pub const SIGNATURE_LABEL: &str = "Підпис";
pub const PHOTO_PLACEHOLDER: &str = "Фото";
const MISSING: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureSlot {
    /// Saved signature image (data URI)
    Image(String),
    /// Nothing saved yet: show the drawing pad
    Pad,
}

/// Everything a card displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub photo: Option<String>,
    pub fields: Vec<CardField>,
    pub signature: Option<SignatureSlot>,
    pub footer: String,
}

/// Build card `index` for `record`, with times shown in `tz`.
/// `None` when there is no template at `index`.
pub fn render_card<Tz>(index: usize, record: &Record, signature: Option<&str>, tz: &Tz) -> Option<Card>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let template = DOCUMENTS.get(index)?;
    let fields = template
        .fields
        .iter()
        .map(|spec| CardField {
            label: spec.label,
            value: match spec.value {
                FieldValue::Name => record.name.clone(),
                FieldValue::DateOfBirth => record.dob.clone(),
                FieldValue::Fixed(text) => text.to_string(),
            },
        })
        .collect();

    let signature = template.signature.then(|| match signature {
        Some(image) if !image.is_empty() => SignatureSlot::Image(image.to_string()),
        _ => SignatureSlot::Pad,
    });

    Some(Card {
        title: template.title,
        photo: record.photo_url().map(str::to_string),
        fields,
        signature,
        footer: updated_footer(record.timestamp, tz),
    })
}

/// `Документ оновлено о HH:MM:SS | DD.MM.YYYY`
pub fn updated_footer<Tz>(timestamp: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let (time, date) = match timestamp {
        Some(ts) => {
            let local = ts.with_timezone(tz);
            (local.format("%H:%M:%S").to_string(), local.format("%d.%m.%Y").to_string())
        }
        None => (MISSING.to_string(), MISSING.to_string()),
    };
    format!("Документ оновлено о {} | {}", time, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn olena() -> Record {
        serde_json::from_str(r#"{"name":"Олена Т.","dob":"01.01.2000","timestamp":1700000000000}"#).unwrap()
    }

    #[test]
    fn test_six_documents_in_order() {
        let titles: Vec<_> = DOCUMENTS.iter().map(|d| d.title).collect();
        assert_eq!(titles.len(), 6);
        assert_eq!(titles[0], "Паспорт громадянина України");
        assert_eq!(titles[5], "Субсидія на пельмені");
        assert_eq!(DOCUMENTS.iter().filter(|d| d.signature).count(), 1);
    }

    #[test]
    fn test_passport_card() {
        let card = render_card(0, &olena(), None, &Utc).unwrap();

        assert_eq!(card.title, "Паспорт громадянина України");
        assert_eq!(
            card.fields,
            vec![
                CardField { label: "ПІБ", value: "Олена Т.".into() },
                CardField { label: "Дата народження", value: "01.01.2000".into() },
            ]
        );
        assert_eq!(card.photo, None);
        assert_eq!(card.signature, Some(SignatureSlot::Pad));
        assert_eq!(card.footer, "Документ оновлено о 22:13:20 | 14.11.2023");
    }

    #[test]
    fn test_saved_signature_on_passport_only() {
        let image = "data:image/png;base64,AAAA";
        let passport = render_card(0, &olena(), Some(image), &Utc).unwrap();
        assert_eq!(passport.signature, Some(SignatureSlot::Image(image.into())));

        let tax = render_card(1, &olena(), Some(image), &Utc).unwrap();
        assert_eq!(tax.signature, None);
        assert_eq!(tax.fields[1].value, "1234567890");
    }

    #[test]
    fn test_footer_in_local_offset() {
        let kyiv = FixedOffset::east_opt(2 * 3600).unwrap();
        let card = render_card(3, &olena(), None, &kyiv).unwrap();
        assert_eq!(card.footer, "Документ оновлено о 00:13:20 | 15.11.2023");
    }

    #[test]
    fn test_missing_values_render_placeholders() {
        let record: Record = serde_json::from_str(r#"{"photo":"https://example.com/p.jpg"}"#).unwrap();
        let card = render_card(4, &record, None, &Utc).unwrap();

        assert_eq!(card.photo.as_deref(), Some("https://example.com/p.jpg"));
        assert_eq!(card.fields[0].value, "");
        assert_eq!(card.footer, "Документ оновлено о — | —");
    }

    #[test]
    fn test_index_past_end() {
        assert_eq!(render_card(DOCUMENTS.len(), &olena(), None, &Utc), None);
    }
}
