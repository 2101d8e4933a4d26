//! HTTP 路由处理

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use ddns_core::{CoreError, DdnsService, UpdateResult, finalize};

use crate::request::{UpdateRequest, is_debug, merge_params, provider_token};

/// 注册路由：任意路径的 GET / POST，第一个路径段为 provider token
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .route(web::get().to(update))
            .route(web::post().to(update)),
    );
}

/// 解析 → 分发 → 规范化
async fn update(
    req: HttpRequest,
    body: web::Bytes,
    service: web::Data<DdnsService>,
) -> HttpResponse {
    let params = match merge_params(req.query_string(), &body) {
        Ok(params) => params,
        Err(e) => {
            // 请求参数都解析不了时无从得知 debug 标志，按非调试处理
            tracing::warn!("Rejected request to {}: {e}", req.path());
            return not_found();
        }
    };
    let debug = is_debug(&params);
    let token = provider_token(req.path());

    // 先确定 provider，未知 token 不看其余参数
    if let Err(e) = ddns_provider::resolve(token) {
        tracing::warn!("{e}");
        return json_response(&UpdateResult::unsupported(&e.token, &e.supported), debug);
    }

    let request = match UpdateRequest::from_params(token, &params) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejected request for '{token}': {e}");
            return failure_response(&e.to_string(), debug);
        }
    };

    match service
        .update(&request.token, &request.credentials, &request.desired)
        .await
    {
        Ok(result) => {
            tracing::info!(
                code = result.code,
                ok = result.ok,
                "[{}] {} -> {}",
                request.token,
                request.desired.fqdn(),
                request.desired.ip
            );
            json_response(&result, debug)
        }
        Err(e) => {
            log_core_error(&e);
            failure_response(&e.to_string(), debug)
        }
    }
}

fn json_response(result: &UpdateResult, debug: bool) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(finalize(result, debug).to_string())
}

fn log_core_error(err: &CoreError) {
    if err.is_expected() {
        tracing::warn!("{err}");
    } else {
        tracing::error!("{err}");
    }
}

/// 调试模式下 200 + 错误文本，否则空的 404
fn failure_response(message: &str, debug: bool) -> HttpResponse {
    if debug {
        HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(message.to_string())
    } else {
        not_found()
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}
