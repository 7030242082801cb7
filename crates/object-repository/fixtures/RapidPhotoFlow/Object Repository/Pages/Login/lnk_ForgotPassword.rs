<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Forgot Password link on login page</description>
   <name>lnk_ForgotPassword</name>
   <tag></tag>
   <elementGuidId>login-forgot-password-link</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//a[contains(text(), 'Forgot password')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>a[href*='forgot-password']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
