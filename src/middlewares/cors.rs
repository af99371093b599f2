use actix_cors::Cors;

/// 抽奖大屏与后台页面通常与接口不同源，本地活动工具放开全部来源
pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_, _req_head| true)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
