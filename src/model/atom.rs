use super::metadata::AtomSite;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: String,
    pub position: [f64; 3],
    pub site: AtomSite,
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3], site: AtomSite) -> Self {
        Self {
            element: element.into(),
            position,
            site,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.site.atom_name
    }

    #[inline]
    pub fn chain_id(&self) -> &str {
        &self.site.chain_id
    }

    #[inline]
    pub fn is_hydrogen(&self) -> bool {
        self.element.eq_ignore_ascii_case("H") || self.element.eq_ignore_ascii_case("D")
    }
}
