macro_rules! env_config {
    ($name:ident, $env_key:expr, $default:expr) => {
        paste::paste! {
            pub static [<KIBCHECK_ $name>]: ::std::sync::LazyLock<&'static str> = ::std::sync::LazyLock::new(|| {
                ::std::boxed::Box::leak(
                    ::std::env::var($env_key)
                        .unwrap_or_else(|_| $default.to_string())
                        .into_boxed_str()
                )
            });
        }
    };
    ($name:ident, $default:expr) => {
        paste::paste! {
            env_config!($name, stringify!([<KIBCHECK_ $name>]), $default);
        }
    };
}

// 默认关闭日志，监控进程只关心退出码
env_config!(LOG, "off");
