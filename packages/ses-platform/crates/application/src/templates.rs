use crate::error::WizardError;
use domain::{
    CapabilityId, Catalog, CostEstimate, CostEstimator, CostRates, ResourceSpec, Selection,
    Template,
};
use serde::Serialize;

/// What applying a template selects, in activation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplatePlan {
    pub template_id: String,
    /// Each layer only needs capabilities from earlier layers.
    pub layers: Vec<Vec<CapabilityId>>,
    /// Prerequisites pulled in that the template does not list itself.
    pub implied: Vec<CapabilityId>,
}

impl TemplatePlan {
    pub fn selection(&self) -> Selection {
        self.layers.iter().flatten().cloned().collect()
    }
}

pub struct TemplateLibrary;

impl TemplateLibrary {
    pub fn plan(catalog: &Catalog, template_id: &str) -> Result<TemplatePlan, WizardError> {
        let template = catalog
            .template(template_id)
            .ok_or_else(|| WizardError::UnknownTemplate(template_id.to_string()))?;

        let graph = catalog.graph();
        let closure = graph.closure(&template.capabilities)?;
        let layers = graph.activation_order(&closure)?;
        let implied = layers
            .iter()
            .flatten()
            .filter(|id| !template.capabilities.contains(id))
            .cloned()
            .collect();

        Ok(TemplatePlan {
            template_id: template.id.clone(),
            layers,
            implied,
        })
    }

    /// Case-insensitive match on name or description.
    pub fn search<'c>(catalog: &'c Catalog, term: &str) -> Vec<&'c Template> {
        let needle = term.trim().to_lowercase();
        catalog
            .templates()
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Most used first; ties by ID.
    pub fn by_popularity(catalog: &Catalog) -> Vec<&Template> {
        let mut templates: Vec<&Template> = catalog.templates().iter().collect();
        templates.sort_by(|a, b| b.popularity.cmp(&a.popularity).then_with(|| a.id.cmp(&b.id)));
        templates
    }

    /// Cost of the template once applied, implied prerequisites included.
    pub fn estimate(
        catalog: &Catalog,
        rates: &CostRates,
        resources: &ResourceSpec,
        template_id: &str,
    ) -> Result<CostEstimate, WizardError> {
        let plan = Self::plan(catalog, template_id)?;
        Ok(CostEstimator::breakdown(rates, resources, &plan.selection()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(raw: &[&str]) -> Vec<CapabilityId> {
        raw.iter().map(|id| CapabilityId::from(*id)).collect()
    }

    #[test]
    fn test_plan_adds_transitive_prerequisites() {
        let catalog = Catalog::bundled().unwrap();
        let plan = TemplateLibrary::plan(&catalog, "tmpl-003").unwrap();

        assert_eq!(
            plan.layers,
            vec![
                ids(&["C01", "C17"]),
                ids(&["C02", "C16"]),
                ids(&["C03", "C07"]),
                ids(&["C09"]),
                ids(&["C04"]),
                ids(&["C05"]),
                ids(&["C12"]),
            ]
        );
        assert_eq!(plan.implied, ids(&["C17", "C16", "C03", "C07", "C09", "C05"]));
        assert_eq!(plan.selection().len(), 10);
    }

    #[test]
    fn test_unknown_template() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(
            TemplateLibrary::plan(&catalog, "tmpl-404").unwrap_err(),
            WizardError::UnknownTemplate("tmpl-404".to_string())
        );
    }

    #[test]
    fn test_by_popularity() {
        let catalog = Catalog::bundled().unwrap();
        let order: Vec<&str> = TemplateLibrary::by_popularity(&catalog)
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(order, vec!["tmpl-003", "tmpl-001", "tmpl-002"]);
    }

    #[test]
    fn test_search_templates() {
        let catalog = Catalog::bundled().unwrap();
        let found = TemplateLibrary::search(&catalog, "production");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "tmpl-002");
    }

    #[test]
    fn test_estimate_counts_implied_capabilities() {
        let catalog = Catalog::bundled().unwrap();
        let estimate = TemplateLibrary::estimate(
            &catalog,
            &CostRates::default(),
            &ResourceSpec::default(),
            "tmpl-003",
        )
        .unwrap();
        // 6.40 compute + 50.00 storage + 10 capabilities at 5.00
        assert_eq!(estimate.daily.to_string(), "106.40");
    }
}
