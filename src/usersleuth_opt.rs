/// Turn the server argument into an ldap url. A bare host (or host:port) is
/// treated as plain ldap.
fn parse_server(s: &str) -> Result<url::Url, String> {
    let candidate = if s.contains("://") {
        s.to_string()
    } else {
        format!("ldap://{}", s)
    };
    let url = url::Url::parse(&candidate).map_err(|e| format!("Invalid server {} - {}", s, e))?;
    match url.scheme() {
        "ldap" | "ldaps" | "ldapi" => Ok(url),
        scheme => Err(format!(
            "Unsupported scheme {}. Valid choices are ldap, ldaps, ldapi",
            scheme
        )),
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "usersleuth",
    about = "Query Active Directory for user details from an Excel file or by first and last name."
)]
struct UserSleuthOpt {
    #[structopt(short, long)]
    /// Display extended information during runtime.
    verbose: bool,

    #[structopt(short = "j", long = "json")]
    /// Emit results as json, one object per searched name.
    json: bool,

    #[structopt(long = "server", parse(try_from_str = parse_server))]
    /// Active Directory server address.
    server: url::Url,

    #[structopt(long = "user")]
    /// Username for AD authentication.
    user: String,

    #[structopt(long = "search-base")]
    /// LDAP search base (e.g., 'dc=your,dc=domain,dc=com').
    search_base: String,

    #[structopt(long = "simple-bind")]
    /// Authenticate with an ldap simple bind instead of NTLM.
    simple_bind: bool,

    #[structopt(
        long = "excel-file",
        parse(from_os_str),
        conflicts_with = "first-name",
        required_unless = "first-name"
    )]
    /// Path to Excel file with 'First Name' and 'Last Name' columns.
    excel_file: Option<std::path::PathBuf>,

    #[structopt(
        long = "fn",
        conflicts_with = "excel-file",
        required_unless = "excel-file",
        requires = "last-name"
    )]
    /// First name of the individual to search.
    first_name: Option<String>,

    #[structopt(long = "ln")]
    /// Last name of the individual to search (required with --fn).
    last_name: Option<String>,
}
