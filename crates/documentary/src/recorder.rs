use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use documentary_core::group::{resolve_group, DocGroup};
use documentary_core::params::{merge_schema_params, FormParameter};
use documentary_core::render::{render_entry, render_header, Entry};
use documentary_core::schema::{FieldType, Schema};
use documentary_core::signature::RequestSignature;
use documentary_core::urls::{fill_placeholders, quote_path};
use documentary_core::Method;

use crate::client::{HttpClient, RecordedResponse, WireRequest};
use crate::error::{Error, Result};

/// Body of a documented request.
///
/// A plain key/value bag cannot recover parameter names and types for the
/// docs, so sending one suppresses documentation for that call. A structured
/// form keeps recording enabled.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Bag(Vec<(String, String)>),
    Form(Vec<FormParameter>),
}

/// One request to dispatch and, by default, document.
pub struct Call<'a> {
    role: &'a str,
    method: Method,
    url: &'a str,
    query_string: Vec<(String, String)>,
    url_params: Vec<String>,
    body: Option<RequestBody>,
    schema: Option<&'a dyn Schema>,
    headers: Vec<(String, String)>,
    record: bool,
}

impl<'a> Call<'a> {
    pub fn new(role: &'a str, method: Method, url: &'a str) -> Self {
        Self {
            role,
            method,
            url,
            query_string: Vec::new(),
            url_params: Vec::new(),
            body: None,
            schema: None,
            headers: Vec::new(),
            record: true,
        }
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string.push((name.into(), value.into()));
        self
    }

    /// Positional value substituted into the next `%s` slot of the URL
    /// template.
    pub fn url_param(mut self, value: impl Into<String>) -> Self {
        self.url_params.push(value.into());
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn form(self, params: Vec<FormParameter>) -> Self {
        self.body(RequestBody::Form(params))
    }

    pub fn bag(self, params: Vec<(String, String)>) -> Self {
        self.body(RequestBody::Bag(params))
    }

    pub fn schema(mut self, schema: &'a dyn Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Dispatch without documenting.
    pub fn no_record(mut self) -> Self {
        self.record = false;
        self
    }
}

/// Wraps an HTTP test client and accumulates markdown documentation for
/// every structurally distinct request dispatched through it.
///
/// The seen-signature set and the opened-group registry belong to this
/// instance alone; call [`DocumentRecorder::reset`] when a new documentation
/// run begins against a fresh destination.
pub struct DocumentRecorder<C> {
    client: C,
    destination: PathBuf,
    title: String,
    version: String,
    seen: HashSet<RequestSignature>,
    open_groups: HashSet<String>,
}

impl<C: HttpClient> DocumentRecorder<C> {
    pub fn new(
        client: C,
        destination: impl Into<PathBuf>,
        title: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            client,
            destination: destination.into(),
            title: title.into(),
            version: version.into(),
            seen: HashSet::new(),
            open_groups: HashSet::new(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    /// Forget every recorded signature and opened group.
    pub fn reset(&mut self) {
        self.seen.clear();
        self.open_groups.clear();
    }

    /// Dispatch a request and, unless recording is off or was downgraded,
    /// document the response. The raw response is returned unconditionally,
    /// independent of the recording outcome.
    pub fn send_request(&mut self, call: Call<'_>) -> Result<RecordedResponse> {
        let mut record = call.record;
        let mut wire = WireRequest {
            headers: call.headers.clone(),
            ..WireRequest::default()
        };
        let mut form: Option<Vec<FormParameter>> = None;

        match call.body {
            Some(RequestBody::Bag(bag)) => {
                if record {
                    log::warn!(
                        "skipping documentation for {} {}: parameters were passed as a plain key/value bag",
                        call.method,
                        call.url
                    );
                    record = false;
                }
                wire.params.extend(bag);
            }
            Some(RequestBody::Form(params)) => {
                for param in &params {
                    if param.type_ == Some(FieldType::File) {
                        wire.files.push((param.name.clone(), param.wire_value()));
                    } else {
                        wire.params.push((param.name.clone(), param.wire_value()));
                    }
                }
                form = Some(params);
            }
            None => {}
        }

        for (name, value) in &call.query_string {
            wire.params.push((name.clone(), value.clone()));
        }

        let real_url = if call.url_params.is_empty() {
            call.url.to_string()
        } else {
            fill_placeholders(call.url, &call.url_params).map_err(Error::UrlTemplate)?
        };
        let real_url = quote_path(&real_url);

        let response = self.client.request(call.method, &real_url, &wire)?;

        if record {
            let query = if call.query_string.is_empty() {
                None
            } else {
                Some(call.query_string.as_slice())
            };
            if let Err(err) = self.document(
                call.role,
                call.method,
                call.url,
                &response,
                &call.headers,
                call.schema,
                form.as_mut(),
                query,
            ) {
                log::error!("failed to document {} {}: {err}", call.method, call.url);
            }
        }

        Ok(response)
    }

    /// Append one documentation entry for the given response. Structural
    /// duplicates are silently skipped.
    #[allow(clippy::too_many_arguments)]
    pub fn document(
        &mut self,
        role: &str,
        method: Method,
        url: &str,
        response: &RecordedResponse,
        request_headers: &[(String, String)],
        schema: Option<&dyn Schema>,
        mut params: Option<&mut Vec<FormParameter>>,
        query_string: Option<&[(String, String)]>,
    ) -> Result<()> {
        let signature = RequestSignature::new(role, method, url, query_string);
        if self.seen.contains(&signature) {
            return Ok(());
        }

        if let (Some(list), Some(schema)) = (params.as_deref_mut(), schema) {
            merge_schema_params(list, &schema.documentable_columns())?;
        }
        let params: &[FormParameter] = params.as_deref().map(Vec::as_slice).unwrap_or(&[]);

        let group = resolve_group(url, method);
        let body = response.text();
        let text = render_entry(&Entry {
            role,
            method,
            url,
            params,
            query_string: query_string.unwrap_or(&[]),
            request_headers,
            response_headers: &response.headers,
            body: &body,
        });

        let mut file = self.open_group(&group)?;
        let written = file.write_all(text.as_bytes());
        // The closing separator keeps the file parseable even after a failed
        // write, and the handle is dropped on every exit path.
        let separator = file.write_all(b"\n");
        drop(file);
        written?;
        separator?;

        self.seen.insert(signature);
        Ok(())
    }

    /// Open the group's file in append mode, creating it with its header
    /// block on first use within this run.
    fn open_group(&mut self, group: &DocGroup) -> Result<File> {
        let path = self.destination.join(format!("{}.md", group.stem));
        if self.open_groups.contains(&group.stem) {
            return Ok(OpenOptions::new().append(true).open(path)?);
        }

        fs::create_dir_all(&self.destination)?;
        let mut file = File::create(path)?;
        file.write_all(render_header(&self.title, &self.version, &group.entity).as_bytes())?;
        self.open_groups.insert(group.stem.clone());
        Ok(file)
    }
}
