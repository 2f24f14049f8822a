use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a workspace crate as seen from the
/// caller's `Cargo.toml`.
///
/// Derive macros emit absolute paths, and those paths must be valid in the
/// crate that invokes the macro, not in the macro crate itself.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_attr"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If a dependency is a rename of the requested crate
///    (`alias = { package = "crate_name", .. }`), return `::alias`.
/// 3. If the requested name begins with `vc_` and the caller depends on the
///    facade crate `vc_record`, return `::vc_record::short_name`
///    (e.g. `vc_attr` -> `::vc_record::attr`).
/// 4. Repeat step 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to `::crate_name`.
///
/// A crate that needs to name itself from generated code should add
/// `extern crate self as crate_name;` to its root, the fallback then resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Option<Document<Box<str>>>,
    pub modified_time: Option<SystemTime>,
}

const FACADE_NAME: &str = "vc_record";
const CRATE_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> Option<PathBuf> {
        env::var_os("CARGO_MANIFEST_DIR").map(|dir| {
            let mut path = PathBuf::from(dir);
            path.push("Cargo.toml");
            path
        })
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    // An unreadable manifest is treated as an empty one: paths fall back to
    // `::crate_name` and the compiler reports anything unresolved.
    #[inline(never)]
    fn read_manifest(path: &Path) -> Option<Document<Box<str>>> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(text).ok()
    }

    // Cargo normalizes `-` to `_` in crate names.
    fn absolute(segments: &[&str]) -> syn::Path {
        let mut path = syn::Path {
            leading_colon: Some(Default::default()),
            segments: Default::default(),
        };
        for segment in segments {
            let ident = syn::Ident::new(&segment.replace('-', "_"), Span::call_site());
            path.segments.push(syn::PathSegment::from(ident));
        }
        path
    }

    fn renamed_as<'t>(deps: &'t Table, name: &str) -> Option<&'t str> {
        deps.iter().find_map(|(alias, item)| {
            let package = item.get("package").and_then(Item::as_str)?;
            (package == name).then_some(alias)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }

        if let Some(alias) = Self::renamed_as(deps, name) {
            return Some(Self::absolute(&[alias]));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::absolute(&[FACADE_NAME, module]));
        }

        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from the
    /// caller's `Cargo.toml`. See the type-level docs for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let Some(manifest) = &self.manifest else {
            return Self::absolute(&[name]);
        };

        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|section| match manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::absolute(&[name]))
    }

    /// Run `func` with the [`Manifest`] of the caller's `Cargo.toml`.
    ///
    /// Parsed manifests are cached per path and re-read only when the file's
    /// modification time changes, so repeated derives in one crate parse the
    /// manifest once.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::get_manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::get_manifest_modified_time(&manifest_path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Some(toml_edit::Document::parse(Box::from(text)).unwrap()),
            modified_time: None,
        }
    }

    fn to_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        let prefix = if path.leading_colon.is_some() { "::" } else { "" };
        format!("{prefix}{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nvc_attr = { path = \"../vc_attr\" }\n");
        assert_eq!(to_string(&m.get_crate_path("vc_attr")), "::vc_attr");
    }

    #[test]
    fn renamed_dependency() {
        let m = manifest("[dependencies]\nattrs = { package = \"vc_attr\", version = \"0.0.1\" }\n");
        assert_eq!(to_string(&m.get_crate_path("vc_attr")), "::attrs");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dev-dependencies]\nvc_record = \"0.0.1\"\n");
        assert_eq!(to_string(&m.get_crate_path("vc_attr")), "::vc_record::attr");
    }

    #[test]
    fn fallback_path() {
        let m = manifest("[dependencies]\nserde = \"1\"\n");
        assert_eq!(to_string(&m.get_crate_path("vc_attr")), "::vc_attr");

        let empty = Manifest {
            manifest: None,
            modified_time: None,
        };
        assert_eq!(to_string(&empty.get_crate_path("vc_attr")), "::vc_attr");
    }
}
