//! Binding redirects and their configuration-fragment form.

use serde::Serialize;

use refscope_core::version::AssemblyVersion;
use refscope_util::errors::RefscopeError;

/// A resolved redirect: treat every request for `name` up to
/// `old_version_ceiling` as satisfied by the installed `new_version`.
///
/// `public_key_token` is lowercase hex or the literal `"null"`; `culture`
/// defaults to `"neutral"`. Produced only for groups whose referenced
/// assembly is itself installed in the scanned directory.
#[derive(Debug, Clone, Serialize)]
pub struct BindingRedirect {
    pub name: String,
    pub public_key_token: String,
    pub culture: String,
    pub old_version_ceiling: AssemblyVersion,
    pub new_version: AssemblyVersion,
}

impl BindingRedirect {
    /// The `oldVersion` range attribute: `0.0.0.0-<ceiling>`.
    pub fn old_version_range(&self) -> String {
        format!("0.0.0.0-{}", self.old_version_ceiling)
    }
}

#[derive(Serialize)]
#[serde(rename = "assemblyBinding")]
struct AssemblyBindingElem<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'a str,
    #[serde(rename = "dependentAssembly")]
    dependent: Vec<DependentAssemblyElem<'a>>,
}

#[derive(Serialize)]
struct DependentAssemblyElem<'a> {
    #[serde(rename = "assemblyIdentity")]
    identity: AssemblyIdentityElem<'a>,
    #[serde(rename = "bindingRedirect")]
    redirect: BindingRedirectElem,
}

#[derive(Serialize)]
struct AssemblyIdentityElem<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(rename = "@publicKeyToken")]
    public_key_token: &'a str,
    #[serde(rename = "@culture")]
    culture: &'a str,
}

#[derive(Serialize)]
struct BindingRedirectElem {
    #[serde(rename = "@oldVersion")]
    old_version: String,
    #[serde(rename = "@newVersion")]
    new_version: String,
}

/// Render redirects as the `<assemblyBinding>` fragment to paste into an
/// application configuration file's `<runtime>` section.
pub fn to_config_fragment(redirects: &[BindingRedirect]) -> Result<String, RefscopeError> {
    let root = AssemblyBindingElem {
        xmlns: "urn:schemas-microsoft-com:asm.v1",
        dependent: redirects
            .iter()
            .map(|redirect| DependentAssemblyElem {
                identity: AssemblyIdentityElem {
                    name: &redirect.name,
                    public_key_token: &redirect.public_key_token,
                    culture: &redirect.culture,
                },
                redirect: BindingRedirectElem {
                    old_version: redirect.old_version_range(),
                    new_version: redirect.new_version.to_string(),
                },
            })
            .collect(),
    };

    let mut out = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut out);
    serializer.indent(' ', 2);
    serde::Serialize::serialize(&root, serializer).map_err(|e| RefscopeError::Report {
        message: format!("failed to serialize binding redirects: {e}"),
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(name: &str, token: &str, ceiling: &str, new: &str) -> BindingRedirect {
        BindingRedirect {
            name: name.to_string(),
            public_key_token: token.to_string(),
            culture: "neutral".to_string(),
            old_version_ceiling: ceiling.parse().unwrap(),
            new_version: new.parse().unwrap(),
        }
    }

    #[test]
    fn old_version_range_starts_at_zero() {
        let r = redirect("Lib", "null", "4.2.0.0", "2.0.0.0");
        assert_eq!(r.old_version_range(), "0.0.0.0-4.2.0.0");
    }

    #[test]
    fn fragment_contains_identity_and_redirect_attributes() {
        let fragment =
            to_config_fragment(&[redirect("Lib", "b77a5c561934e089", "2.0.0.0", "1.5.0.0")])
                .unwrap();

        assert!(fragment.contains("<assemblyBinding xmlns=\"urn:schemas-microsoft-com:asm.v1\""));
        assert!(fragment.contains("name=\"Lib\""));
        assert!(fragment.contains("publicKeyToken=\"b77a5c561934e089\""));
        assert!(fragment.contains("culture=\"neutral\""));
        assert!(fragment.contains("oldVersion=\"0.0.0.0-2.0.0.0\""));
        assert!(fragment.contains("newVersion=\"1.5.0.0\""));
    }

    #[test]
    fn unsigned_assembly_renders_null_token() {
        let fragment = to_config_fragment(&[redirect("Lib", "null", "1.0.0.0", "1.0.0.0")]).unwrap();
        assert!(fragment.contains("publicKeyToken=\"null\""));
    }

    #[test]
    fn one_dependent_assembly_element_per_redirect() {
        let fragment = to_config_fragment(&[
            redirect("Lib", "null", "2.0.0.0", "1.0.0.0"),
            redirect("Other", "null", "3.0.0.0", "3.0.0.0"),
        ])
        .unwrap();
        assert_eq!(fragment.matches("<dependentAssembly>").count(), 2);
    }

    #[test]
    fn empty_redirect_list_has_no_dependent_assemblies() {
        let fragment = to_config_fragment(&[]).unwrap();
        assert!(fragment.contains("assemblyBinding"));
        assert!(!fragment.contains("dependentAssembly"));
    }
}
