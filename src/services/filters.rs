// src/services/filters.rs

// Filtros aplicados em memória sobre a coleção já buscada.
// A ordem original é sempre preservada.

use serde::{
    de::{value::StrDeserializer, IntoDeserializer},
    Deserialize, Deserializer, Serialize,
};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{
    admin::AdminUser,
    application::{Application, ApplicationStatus, MembershipType},
    booking::{Booking, BookingStatus},
    content::{ContentItem, ContentKind},
    member::{Member, MemberStatus},
};

// --- Filtro de status: "all" (ou vazio) = sem filtro ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
    // Valor fora do vocabulário; recusado em `validate` com o nome do campo
    Unrecognised(String),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: PartialEq + Copy> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
            StatusFilter::Unrecognised(_) => false,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, StatusFilter::All)
    }
}

impl<S> StatusFilter<S> {
    fn check(&self, field: &'static str, errors: &mut ValidationErrors) {
        if let StatusFilter::Unrecognised(raw) = self {
            let mut err = ValidationError::new("unknown_filter_value");
            err.message = Some(format!("'{}' is not a valid {} filter.", raw, field).into());
            errors.add(field, err);
        }
    }
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for StatusFilter<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        let inner: StrDeserializer<'_, serde::de::value::Error> = raw.into_deserializer();
        Ok(S::deserialize(inner)
            .map(StatusFilter::Only)
            .unwrap_or_else(|_| StatusFilter::Unrecognised(raw.to_string())))
    }
}

// --- Busca textual ---

pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

// Substring sem diferenciar maiúsculas. Termo vazio casa com tudo.
pub fn matches_search<T: Searchable>(item: &T, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    item.search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&term))
}

impl Searchable for Booking {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.client_name.as_str(),
            self.client_email.as_str(),
            self.service.as_str(),
        ];
        fields.extend(self.needs.as_deref());
        fields
    }
}

impl Searchable for Application {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ];
        fields.extend(self.organization.as_deref());
        fields.extend(self.qualification.as_deref());
        fields
    }
}

impl Searchable for Member {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ];
        fields.extend(self.organization.as_deref());
        fields
    }
}

impl Searchable for ContentItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.summary.as_deref());
        fields.extend(self.body.as_deref());
        fields
    }
}

impl Searchable for AdminUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.as_str()]
    }
}

// --- Resultado filtrado ---

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilteredView<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub matched: usize,
    pub filters_active: bool,
    // O front mostra "nenhum resultado" com o botão de limpar filtros
    pub no_results: bool,
}

impl<T: Clone> FilteredView<T> {
    pub fn build(source: &[T], filters_active: bool, keep: impl Fn(&T) -> bool) -> Self {
        let items: Vec<T> = source.iter().filter(|item| keep(*item)).cloned().collect();
        let matched = items.len();
        Self {
            items,
            total: source.len(),
            matched,
            filters_active,
            no_results: matched == 0,
        }
    }
}

impl<T> FilteredView<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> FilteredView<U> {
        FilteredView {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            matched: self.matched,
            filters_active: self.filters_active,
            no_results: self.no_results,
        }
    }
}

// --- Filtros por tela ---

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingFilter {
    pub search: String,
    pub status: StatusFilter<BookingStatus>,
}

impl Validate for BookingFilter {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.status.check("status", &mut errors);
        into_result(errors)
    }
}

impl BookingFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.status.is_active()
    }

    pub fn apply(&self, bookings: &[Booking]) -> FilteredView<Booking> {
        FilteredView::build(bookings, self.is_active(), |b| {
            self.status.matches(b.status) && matches_search(b, &self.search)
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationFilter {
    pub search: String,
    pub status: StatusFilter<ApplicationStatus>,
    pub membership_type: StatusFilter<MembershipType>,
}

impl Validate for ApplicationFilter {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.status.check("status", &mut errors);
        self.membership_type.check("membershipType", &mut errors);
        into_result(errors)
    }
}

impl ApplicationFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.status.is_active() || self.membership_type.is_active()
    }

    pub fn apply(&self, applications: &[Application]) -> FilteredView<Application> {
        FilteredView::build(applications, self.is_active(), |a| {
            self.status.matches(a.application_status)
                && self.membership_type.matches(a.membership_type)
                && matches_search(a, &self.search)
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberFilter {
    pub search: String,
    pub status: StatusFilter<MemberStatus>,
}

impl Validate for MemberFilter {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.status.check("status", &mut errors);
        into_result(errors)
    }
}

impl MemberFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.status.is_active()
    }

    pub fn apply(&self, members: &[Member]) -> FilteredView<Member> {
        FilteredView::build(members, self.is_active(), |m| {
            self.status.matches(m.member_status) && matches_search(m, &self.search)
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentFilter {
    pub search: String,
    pub kind: StatusFilter<ContentKind>,
    pub category: Option<String>,
    pub tag: Option<String>,
}

impl Validate for ContentFilter {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.kind.check("kind", &mut errors);
        into_result(errors)
    }
}

impl ContentFilter {
    fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.kind.is_active()
            || self.category().is_some()
            || self.tag().is_some()
    }

    pub fn apply(&self, items: &[ContentItem]) -> FilteredView<ContentItem> {
        let category = self.category();
        let tag = self.tag();
        FilteredView::build(items, self.is_active(), |item| {
            self.kind.matches(item.kind)
                && category.is_none_or(|c| item.category.eq_ignore_ascii_case(c))
                && tag.is_none_or(|t| item.tags.iter().any(|it| it.eq_ignore_ascii_case(t)))
                && matches_search(item, &self.search)
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminFilter {
    pub search: String,
}

// Só busca textual; nada a recusar.
impl Validate for AdminFilter {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

impl AdminFilter {
    pub fn apply(&self, admins: &[AdminUser]) -> FilteredView<AdminUser> {
        let active = !self.search.trim().is_empty();
        FilteredView::build(admins, active, |a| matches_search(a, &self.search))
    }
}
