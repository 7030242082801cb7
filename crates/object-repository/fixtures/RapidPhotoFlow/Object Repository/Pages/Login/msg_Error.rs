<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Error message on login page</description>
   <name>msg_Error</name>
   <tag></tag>
   <elementGuidId>login-error-message</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[contains(@class, 'error') or contains(@class, 'text-red')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>.text-red-500, .error-message, [role='alert']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
