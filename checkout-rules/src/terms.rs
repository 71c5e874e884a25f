use tracing::trace;

/// One line of a terms-of-service checklist.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub required: bool,
    #[cfg_attr(feature = "serde", serde(alias = "term", default))]
    pub label: String,
    #[cfg_attr(feature = "serde", serde(rename = "isChecked"))]
    pub is_checked: bool,
}

impl Term {
    pub fn required(label: impl Into<String>, is_checked: bool) -> Self {
        Self { required: true, label: label.into(), is_checked }
    }

    pub fn optional(label: impl Into<String>, is_checked: bool) -> Self {
        Self { required: false, label: label.into(), is_checked }
    }

    pub fn check(&mut self) {
        self.is_checked = true;
    }
}

/// Required terms that are still unchecked, in input order.
pub fn unchecked_required_terms(terms: &[Term]) -> impl Iterator<Item = &Term> {
    terms.iter().filter(|term| term.required && !term.is_checked)
}

/// True when every required term is checked. Optional terms never matter,
/// and a list without required terms passes.
pub fn check_all_required_terms(terms: &[Term]) -> bool {
    match unchecked_required_terms(terms).next() {
        Some(term) => {
            trace!(label = %term.label, "required term unchecked");
            false
        }
        None => true,
    }
}
