//! System instructions for the model call.
//!
//! Content varies along two independent axes: predefined vs custom field
//! mode, and output language. Every variant pins the sentinel string and
//! forbids inventing content not present in the supplied job text.

use crate::catalog::Language;

const PREDEFINED_EN: &str = "You are an assistant that extracts structured data from job postings. \
Follow the provided JSON schema exactly and fill every required field. \
Use only information present in the supplied job text; never invent or embellish data. \
When a value is not present in the text, use exactly \"Not specified\".";

const PREDEFINED_IT: &str = "Sei un assistente che estrae dati strutturati dagli annunci di lavoro. \
Segui esattamente lo schema JSON fornito e compila ogni campo richiesto. \
Rispondi in italiano, traducendo i contenuti estratti ma mantenendo in lingua originale \
i nomi propri di tecnologie e strumenti. \
Usa solo le informazioni presenti nel testo dell'annuncio; non inventare mai dati. \
Quando un'informazione non è presente, usa esattamente \"Non specificato\".";

const CUSTOM_EN: &str = "You are an assistant that extracts structured data from job postings. \
The user chose which pieces of information they want: map the extracted content only to the \
fields the user asked for, and add nothing else. \
Use only information present in the supplied job text; never invent or embellish data. \
When a value is not present in the text, use exactly \"Not specified\".";

const CUSTOM_IT: &str = "Sei un assistente che estrae dati strutturati dagli annunci di lavoro. \
L'utente ha scelto quali informazioni vuole: riporta i contenuti estratti solo nei campi \
richiesti dall'utente, senza aggiungere altro. \
Rispondi in italiano, traducendo i contenuti estratti ma mantenendo in lingua originale \
i nomi propri di tecnologie e strumenti. \
Usa solo le informazioni presenti nel testo dell'annuncio; non inventare mai dati. \
Quando un'informazione non è presente, usa esattamente \"Non specificato\".";

const REPUTATION_EN: &str = "The request includes company-reputation fields. Search the web for \
employer reviews of the company, comparing at least Glassdoor and Indeed; prefer whichever \
source has more and fresher data, and state which source you used in the reviewSource field.";

const REPUTATION_IT: &str = "La richiesta include campi sulla reputazione aziendale. Cerca sul web \
le recensioni dei dipendenti, confrontando almeno Glassdoor e Indeed; preferisci la fonte con \
dati più numerosi e recenti, e indica la fonte usata nel campo reviewSource.";

/// Build the system instruction for one call.
pub fn system_instruction(
    language: Language,
    is_custom_format: bool,
    has_company_reviews: bool,
) -> String {
    let base = match (language, is_custom_format) {
        (Language::English, false) => PREDEFINED_EN,
        (Language::English, true) => CUSTOM_EN,
        (Language::Italian, false) => PREDEFINED_IT,
        (Language::Italian, true) => CUSTOM_IT,
    };

    if has_company_reviews {
        let addendum = match language {
            Language::English => REPUTATION_EN,
            Language::Italian => REPUTATION_IT,
        };
        format!("{base}\n\n{addendum}")
    } else {
        base.to_string()
    }
}
