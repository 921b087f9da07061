use structopt::StructOpt;
use usersleuth::*;

include!("./usersleuth_opt.rs");

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opt = UserSleuthOpt::from_args();
    usersleuth::start_tracing(opt.verbose);
    info!("usersleuth command line utility");

    let format = if opt.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdout = std::io::stdout();
    let mut presenter = Presenter::new(stdout.lock(), format);

    let source = match InputSource::from_args(opt.excel_file, opt.first_name, opt.last_name) {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            UserSleuthOpt::clap().print_help().ok();
            std::process::exit(e.exit_code());
        }
    };

    let method = if opt.simple_bind {
        BindMethod::Simple
    } else {
        BindMethod::Ntlm
    };
    let client = DirectoryClient::new(opt.server, &opt.user, method, &opt.search_base);

    let password = rpassword::read_password_from_tty(Some("Enter AD password: "));

    let code = run_lookup(&client, password, &source, &mut presenter).await;
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use structopt::clap::ErrorKind;

    fn parse(extra: &[&str]) -> Result<UserSleuthOpt, structopt::clap::Error> {
        let mut args = vec![
            "usersleuth",
            "--server",
            "dc01.example.com",
            "--user",
            "EXAMPLE\\jdoe",
            "--search-base",
            "dc=example,dc=com",
        ];
        args.extend_from_slice(extra);
        UserSleuthOpt::from_iter_safe(args)
    }

    #[test]
    fn test_first_name_requires_last_name() {
        let e = parse(&["--fn", "A"]).expect_err("must fail");
        assert_eq!(e.kind, ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_excel_file_conflicts_with_first_name() {
        let e = parse(&["--excel-file", "x.xlsx", "--fn", "A", "--ln", "B"])
            .expect_err("must fail");
        assert_eq!(e.kind, ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_one_input_required() {
        let e = parse(&[]).expect_err("must fail");
        assert_eq!(e.kind, ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_literal_names() {
        let opt = parse(&["--fn", "A", "--ln", "B"]).expect("valid");
        assert_eq!(opt.first_name.as_deref(), Some("A"));
        assert_eq!(opt.last_name.as_deref(), Some("B"));
        assert!(opt.excel_file.is_none());
        assert_eq!(opt.server.host_str(), Some("dc01.example.com"));
    }

    #[test]
    fn test_excel_file() {
        let opt = parse(&["--excel-file", "x.xlsx"]).expect("valid");
        assert_eq!(opt.excel_file, Some(std::path::PathBuf::from("x.xlsx")));
        assert!(opt.first_name.is_none());
    }

    #[test]
    fn test_server_scheme() {
        let opt = parse(&["--excel-file", "x.xlsx"]).expect("valid");
        assert_eq!(opt.server.scheme(), "ldap");
        assert!(parse_server("ldaps://dc01.example.com:636").is_ok());
        assert!(parse_server("http://dc01.example.com").is_err());
    }
}
