//! Account resources and request URL construction.

/// The API resources this application reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    TokenInfo,
    AccountRaids,
    AccountAchievements,
    AccountMinis,
    AccountSkins,
    Characters,
    AccountInventory,
    AccountMaterials,
    AccountBank,
    AccountWallet,
}

impl Resource {
    /// Path of the resource relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::TokenInfo => "tokeninfo",
            Resource::AccountRaids => "account/raids",
            Resource::AccountAchievements => "account/achievements",
            Resource::AccountMinis => "account/minis",
            Resource::AccountSkins => "account/skins",
            Resource::Characters => "characters",
            Resource::AccountInventory => "account/inventory",
            Resource::AccountMaterials => "account/materials",
            Resource::AccountBank => "account/bank",
            Resource::AccountWallet => "account/wallet",
        }
    }
}

/// Builds the request URL for a resource.
///
/// - More than one id joins them as `?ids=a,b,c`.
/// - Exactly one id addresses the singular path `<resource>/<id>`.
/// - The access token is appended with `?` or `&` as appropriate.
///
/// Ids and the token are percent-encoded.
///
/// # Examples
///
/// ```
/// use raidexplorer_gw2_api::{build_url, Resource};
///
/// let url = build_url("https://api.guildwars2.com/v2", Resource::Characters, &["A".into(), "B".into()], Some("KEY"));
/// assert_eq!(url, "https://api.guildwars2.com/v2/characters?ids=A,B&access_token=KEY");
/// ```
pub fn build_url(
    base_url: &str,
    resource: Resource,
    ids: &[String],
    access_token: Option<&str>,
) -> String {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), resource.path());
    let mut separator = '?';

    match ids {
        [] => {}
        [single] => {
            url.push('/');
            url.push_str(&urlencoding::encode(single));
        }
        many => {
            let joined = many
                .iter()
                .map(|id| urlencoding::encode(id).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            url.push_str("?ids=");
            url.push_str(&joined);
            separator = '&';
        }
    }

    if let Some(token) = access_token {
        url.push(separator);
        url.push_str("access_token=");
        url.push_str(&urlencoding::encode(token));
    }

    url
}

/// Replaces the value of the `access_token` query parameter for logging.
pub fn redact_token(url: &str) -> String {
    match url.find("access_token=") {
        Some(start) => {
            let value_start = start + "access_token=".len();
            let value_end = url[value_start..]
                .find('&')
                .map(|offset| value_start + offset)
                .unwrap_or(url.len());
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}
