use crate::dependency::PrerequisiteGraph;
use crate::entities::{
    CapabilityDefinition, CapabilityId, EnablerDefinition, EnablerId, Template,
};
use crate::error::{CatalogError, ResolveError};
use ses_manifest::{CatalogManifest, ManifestParser};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::info;

/// The validated capability/enabler registry.
///
/// Built once at startup and never mutated afterwards; share it behind an
/// `Arc` and read it from any thread.
#[derive(Debug, Clone)]
pub struct Catalog {
    capabilities: Vec<CapabilityDefinition>,
    capability_index: HashMap<CapabilityId, usize>,
    enablers: BTreeMap<EnablerId, EnablerDefinition>,
    templates: Vec<Template>,
    graph: PrerequisiteGraph,
}

impl Catalog {
    /// Validate and index the definitions.
    ///
    /// Fails on duplicate IDs, references to unknown enablers or
    /// capabilities, and prerequisite cycles.
    pub fn load(
        capabilities: Vec<CapabilityDefinition>,
        enablers: Vec<EnablerDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut enabler_map = BTreeMap::new();
        for enabler in enablers {
            if enabler_map.contains_key(&enabler.id) {
                return Err(CatalogError::DuplicateEnabler(enabler.id));
            }
            enabler_map.insert(enabler.id.clone(), enabler);
        }

        let mut capability_index = HashMap::with_capacity(capabilities.len());
        for (position, cap) in capabilities.iter().enumerate() {
            if capability_index.insert(cap.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCapability(cap.id.clone()));
            }
        }

        for cap in &capabilities {
            if let Some(missing) = cap.enablers.iter().find(|e| !enabler_map.contains_key(*e)) {
                return Err(CatalogError::DanglingEnabler {
                    capability: cap.id.clone(),
                    enabler: missing.clone(),
                });
            }
            if let Some(missing) = cap
                .prerequisites
                .iter()
                .find(|p| !capability_index.contains_key(*p))
            {
                return Err(CatalogError::DanglingPrerequisite {
                    capability: cap.id.clone(),
                    prerequisite: missing.clone(),
                });
            }
        }

        let graph = PrerequisiteGraph::build(&capabilities)?;

        info!(
            capabilities = capabilities.len(),
            enablers = enabler_map.len(),
            "Capability catalog loaded"
        );

        Ok(Self {
            capabilities,
            capability_index,
            enablers: enabler_map,
            templates: Vec::new(),
            graph,
        })
    }

    /// Attach templates; every capability they list must exist.
    pub fn with_templates(mut self, templates: Vec<Template>) -> Result<Self, CatalogError> {
        for template in &templates {
            if let Some(missing) = template
                .capabilities
                .iter()
                .find(|c| !self.capability_index.contains_key(*c))
            {
                return Err(CatalogError::DanglingTemplateCapability {
                    template: template.id.clone(),
                    capability: missing.clone(),
                });
            }
        }
        self.templates = templates;
        Ok(self)
    }

    pub fn from_manifest(manifest: &CatalogManifest) -> Result<Self, CatalogError> {
        let capabilities = manifest
            .capabilities
            .iter()
            .map(|spec| {
                CapabilityDefinition::new(spec.id.as_str(), spec.name.as_str())
                    .with_description(spec.description.as_str())
                    .with_enablers(spec.enablers.iter().map(String::as_str))
                    .with_prerequisites(spec.dependencies.iter().map(String::as_str))
            })
            .collect();

        let enablers = manifest
            .enablers
            .iter()
            .map(|(id, spec)| {
                EnablerDefinition::new(id.as_str(), spec.name.as_str(), spec.description.as_str())
            })
            .collect();

        let templates = manifest
            .templates
            .iter()
            .map(|spec| Template {
                id: spec.id.clone(),
                name: spec.name.clone(),
                description: spec.description.clone(),
                capabilities: spec
                    .capabilities
                    .iter()
                    .map(|c| CapabilityId::new(c.as_str()))
                    .collect(),
                popularity: spec.popularity,
            })
            .collect();

        Self::load(capabilities, enablers)?.with_templates(templates)
    }

    /// Load a catalog definition file (TOML, JSON or YAML by extension).
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let manifest = ManifestParser::parse_file(path)
            .map_err(|e| CatalogError::Manifest(format!("{:#}", e)))?;
        Self::from_manifest(&manifest)
    }

    /// The catalog shipped with the platform.
    pub fn bundled() -> Result<Self, CatalogError> {
        let manifest =
            CatalogManifest::bundled().map_err(|e| CatalogError::Manifest(format!("{:#}", e)))?;
        Self::from_manifest(&manifest)
    }

    pub fn capability(&self, id: &str) -> Result<&CapabilityDefinition, ResolveError> {
        self.capability_index
            .get(id)
            .map(|&position| &self.capabilities[position])
            .ok_or_else(|| ResolveError::UnknownCapability(CapabilityId::new(id)))
    }

    pub fn enabler(&self, id: &str) -> Result<&EnablerDefinition, ResolveError> {
        self.enablers
            .get(id)
            .ok_or_else(|| ResolveError::UnknownEnabler(EnablerId::new(id)))
    }

    /// All capabilities in definition order.
    pub fn list_capabilities(&self) -> &[CapabilityDefinition] {
        &self.capabilities
    }

    /// All enablers in ID order.
    pub fn list_enablers(&self) -> impl Iterator<Item = &EnablerDefinition> {
        self.enablers.values()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn graph(&self) -> &PrerequisiteGraph {
        &self.graph
    }

    /// Capabilities whose id, name or description contain `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&CapabilityDefinition> {
        self.capabilities
            .iter()
            .filter(|cap| cap.matches(term))
            .collect()
    }
}
