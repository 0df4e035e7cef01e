/// Substitute positional `%s` placeholders into a URL template.
///
/// The number of arguments must match the number of placeholders exactly.
pub fn fill_placeholders(template: &str, args: &[String]) -> Result<String, String> {
    let slots = template.matches("%s").count();
    if slots != args.len() {
        return Err(format!(
            "url template '{template}' expects {slots} parameters, got {}",
            args.len()
        ));
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(index) = rest.find("%s") {
        out.push_str(&rest[..index]);
        if let Some(arg) = args.next() {
            out.push_str(arg);
        }
        rest = &rest[index + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Percent-encode a URL path, keeping `/` separators intact.
pub fn quote_path(url: &str) -> String {
    url.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
