use crate::config;
use crate::output::CliOutput;
use anyhow::Context as _;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
#[clap(rename_all = "kebab-case")]
pub struct Contexts {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, clap::Subcommand)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create a context, or update the context if it already exists.
    ///
    /// The first context which is created becomes the current context.
    Create(Create),
    /// Select the current context, which is used by commands
    /// that don't pass `--context`.
    Use(Use),
    /// Unset the current context.
    Unset,
    /// List contexts.
    List,
    /// Delete a context.
    Delete(Delete),
}

#[derive(Debug, clap::Args)]
#[clap(rename_all = "kebab-case")]
pub struct Create {
    /// Name of the context.
    name: String,
    /// Cluster API endpoint, such as `10.0.0.1:9020`.
    /// The port defaults to 9020 if not provided.
    #[clap(long)]
    endpoint: String,
    /// Bearer token presented to the cluster.
    #[clap(long)]
    token: Option<String>,
    /// Connect to the cluster using TLS.
    #[clap(long)]
    secure: bool,
    /// Path of a PEM CA certificate which verifies the cluster.
    /// Implies `--secure`.
    #[clap(long)]
    cafile: Option<PathBuf>,
    /// Path of a kubeconfig of the Kubernetes cluster which runs the cluster.
    #[clap(long)]
    kubeconfig: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct Use {
    /// Name of the context to select.
    name: String,
}

#[derive(Debug, clap::Args)]
pub struct Delete {
    /// Name of the context to delete.
    name: String,
}

impl Contexts {
    pub async fn run(&self, ctx: &mut crate::CliContext) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Create(create) => do_create(ctx, create),
            Command::Use(Use { name }) => {
                ctx.config_mut().set_current(name)?;
                println!("Current context set to {name}");
                Ok(())
            }
            Command::Unset => {
                ctx.config_mut().unset_current();
                println!("Current context unset");
                Ok(())
            }
            Command::List => do_list(ctx),
            Command::Delete(Delete { name }) => {
                ctx.config_mut().remove(name)?;
                println!("Deleted context {name}");
                Ok(())
            }
        }
    }
}

fn do_create(
    ctx: &mut crate::CliContext,
    Create {
        name,
        endpoint,
        token,
        secure,
        cafile,
        kubeconfig,
    }: &Create,
) -> anyhow::Result<()> {
    let endpoint = config::validate_endpoint(endpoint).context("invalid endpoint for the context")?;

    // Updates retain the token and TLS material of an existing context,
    // unless they're provided anew.
    let mut context = match ctx.config().contexts.get(name) {
        Some(existing) => existing.clone(),
        None => config::Context {
            endpoint: String::new(),
            token: None,
            secure: false,
            ca_cert: None,
            kubeconfig: None,
        },
    };
    context.endpoint = endpoint;
    context.secure = *secure;

    if let Some(kubeconfig) = kubeconfig {
        if !kubeconfig.is_file() {
            anyhow::bail!("kubeconfig file {} does not exist", kubeconfig.display());
        }
        context.kubeconfig = Some(kubeconfig.clone());
    }
    if let Some(token) = token {
        context.token = Some(token.clone());
    }
    if let Some(cafile) = cafile {
        if !cafile.is_file() {
            anyhow::bail!("CA file {} does not exist", cafile.display());
        }
        let pem = std::fs::read_to_string(cafile)
            .with_context(|| format!("unable to read CA file {}", cafile.display()))?;

        context.ca_cert = Some(pem);
        context.secure = true;
    }

    let updated = ctx.config_mut().upsert(name, context);
    let path = ctx.config_path().display();

    if updated {
        println!("Updated context {name} in {path}");
    } else {
        println!("New context {name} saved to {path}");
    }
    Ok(())
}

fn do_list(ctx: &mut crate::CliContext) -> anyhow::Result<()> {
    let config = ctx.config();

    let rows: Vec<ContextRow> = config
        .contexts
        .iter()
        .map(|(name, context)| ContextRow {
            name: name.clone(),
            current: config.current.as_deref() == Some(name.as_str()),
            endpoint: context.endpoint.clone(),
            secure: context.secure,
            has_token: context.token.is_some(),
            has_ca_cert: context.ca_cert.is_some(),
            kubeconfig: context.kubeconfig.clone(),
        })
        .collect();

    ctx.write_all(rows, ())
}

/// ContextRow describes a context without revealing its secrets.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContextRow {
    name: String,
    current: bool,
    endpoint: String,
    secure: bool,
    has_token: bool,
    has_ca_cert: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    kubeconfig: Option<PathBuf>,
}

impl CliOutput for ContextRow {
    type TableAlt = ();
    type CellValue = String;

    fn table_headers(_alt: Self::TableAlt) -> Vec<&'static str> {
        vec!["Current", "Name", "Endpoint", "Secure", "Token", "Kubeconfig"]
    }

    fn into_table_row(self, _alt: Self::TableAlt) -> Vec<Self::CellValue> {
        vec![
            if self.current { "*" } else { "" }.to_string(),
            self.name,
            self.endpoint,
            self.secure.to_string(),
            if self.has_token { "yes" } else { "no" }.to_string(),
            self.kubeconfig
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::ContextRow;
    use crate::output::render_table;

    #[test]
    fn test_context_table() {
        let rows = vec![
            ContextRow {
                name: "prod".to_string(),
                current: true,
                endpoint: "px.example.com:9020".to_string(),
                secure: true,
                has_token: true,
                has_ca_cert: false,
                kubeconfig: None,
            },
            ContextRow {
                name: "staging".to_string(),
                current: false,
                endpoint: "10.0.0.1:9020".to_string(),
                secure: false,
                has_token: false,
                has_ca_cert: false,
                kubeconfig: Some("/home/me/.kube/config".into()),
            },
        ];
        let table = render_table((), rows).to_string();

        for expect in ["Current", "prod", "px.example.com:9020", "yes", "/home/me/.kube/config"] {
            assert!(table.contains(expect), "missing {expect:?} in:\n{table}");
        }
    }
}
